use anyhow::{anyhow, bail, Context};
use bytewise::{Address, ByteStore, MemoryConfig, Tag, Variable};

/// Build a zeroed store of `size` bytes with the default dump layout.
pub fn new_store(size: usize) -> anyhow::Result<ByteStore> {
    ByteStore::with_config(&MemoryConfig::new().with_size(size))
        .with_context(|| format!("cannot create a store of {size} bytes"))
}

/// Parse an address supporting hex (0x..., optionally preceded by '-') and signed decimal.
pub fn parse_address(s: &str) -> anyhow::Result<Address> {
    let trimmed = s.trim();
    let (negative, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    if let Some(hex) = unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        if hex.starts_with(['+', '-']) {
            bail!("invalid hex address: {s}");
        }
        let magnitude =
            Address::from_str_radix(hex, 16).with_context(|| format!("invalid hex address: {s}"))?;
        Ok(if negative { -magnitude } else { magnitude })
    } else {
        trimmed
            .parse::<Address>()
            .with_context(|| format!("invalid address: {s}"))
    }
}

/// Parse `ADDR:TAG` into a variable handle.
pub fn parse_variable(s: &str) -> anyhow::Result<Variable> {
    let (address, tag) = s
        .split_once(':')
        .ok_or_else(|| anyhow!("expected ADDR:TAG, got '{s}'"))?;
    let tag: Tag = tag
        .trim()
        .parse()
        .with_context(|| format!("unknown tag '{tag}' (expected u8, s8, u16 or s16)"))?;
    Ok(Variable::new(parse_address(address)?, tag))
}

/// Parse `ADDR:TAG=VALUE` into a variable and the value to store.
pub fn parse_assignment(s: &str) -> anyhow::Result<(Variable, i64)> {
    let (target, value) = s
        .split_once('=')
        .ok_or_else(|| anyhow!("expected ADDR:TAG=VALUE, got '{s}'"))?;
    let value = bytewise::parse_integer(value)?;
    Ok((parse_variable(target)?, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address() {
        assert_eq!(parse_address("12").unwrap(), 12);
        assert_eq!(parse_address("0x1e").unwrap(), 30);
        assert_eq!(parse_address("-1").unwrap(), -1);
        assert!(parse_address("zz").is_err());
    }

    #[test]
    fn test_parse_address_sign_before_hex_prefix() {
        assert_eq!(parse_address("-0x1").unwrap(), -1);
        assert_eq!(parse_address("-0X20").unwrap(), -32);
        assert!(parse_address("0x-1").is_err());
        assert!(parse_address("0x+1").is_err());
        assert!(parse_address("--0x1").is_err());
    }

    #[test]
    fn test_new_store_rejects_unallocatable_size() {
        assert_eq!(new_store(32).unwrap().len(), 32);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let err = new_store(i64::MAX as usize).unwrap_err();
        assert!(format!("{err:#}").contains("cannot allocate"));
    }

    #[test]
    fn test_parse_variable() {
        assert_eq!(
            parse_variable("0x08:sint16").unwrap(),
            Variable::new(8, Tag::S16)
        );
        assert!(parse_variable("8").is_err());
        assert!(parse_variable("8:u32").is_err());
    }

    #[test]
    fn test_parse_assignment() {
        let (var, value) = parse_assignment("0:u8=254").unwrap();
        assert_eq!(var, Variable::new(0, Tag::U8));
        assert_eq!(value, 254);
        assert!(parse_assignment("0:u8=lots").is_err());
        assert!(parse_assignment("0:u8").is_err());
    }
}
