/// Register layout: one bit per option, LSB first.
///
/// | option index | bit | mask          |
/// |--------------|-----|---------------|
/// | 0            |   0 | `1 << 0`      |
/// | 1            |   1 | `1 << 1`      |
/// | ...          | ... | ...           |
/// | 63           |  63 | `1 << 63`     |
///
/// The register is a `u64`, so at most 64 options fit.
pub const REGISTER_BITS: u32 = u64::BITS;

/// Returns the single-bit mask for `index`, or `None` past the register width.
///
/// # Examples
///
/// ```
/// use option_bitfield::common::bit;
///
/// assert_eq!(bit::mask(0), Some(0b1));
/// assert_eq!(bit::mask(7), Some(0b1000_0000));
/// assert_eq!(bit::mask(63), Some(1u64 << 63));
/// assert_eq!(bit::mask(64), None);
/// ```
pub fn mask(index: u32) -> Option<u64> {
    1u64.checked_shl(index)
}

/// Reads one bit of the register.
///
/// # Examples
///
/// ```
/// use option_bitfield::common::bit;
///
/// assert!(bit::get(0b1001, 0));
/// assert!(!bit::get(0b1001, 1));
/// assert!(bit::get(0b1001, 3));
/// assert!(!bit::get(0b1001, 64)); // past the register
/// ```
pub fn get(value: u64, index: u32) -> bool {
    match mask(index) {
        Some(m) => value & m == m,
        None => false,
    }
}

/// Sets one bit, returning the updated register. Other bits are not affected.
///
/// # Examples
///
/// ```
/// use option_bitfield::common::bit;
///
/// let value = bit::set(0, 7);
/// let value = bit::set(value, 4);
/// assert_eq!(value, 144);
///
/// // already set
/// assert_eq!(bit::set(value, 4), 144);
/// ```
pub fn set(value: u64, index: u32) -> u64 {
    match mask(index) {
        Some(m) => value | m,
        None => value,
    }
}

/// Clears one bit, returning the updated register. Other bits are not affected.
///
/// # Examples
///
/// ```
/// use option_bitfield::common::bit;
///
/// assert_eq!(bit::clear(144, 7), 16);
/// assert_eq!(bit::clear(16, 7), 16);
/// ```
pub fn clear(value: u64, index: u32) -> u64 {
    match mask(index) {
        Some(m) => value & !m,
        None => value,
    }
}

/// Renders the register as a base-2 literal without leading zeros.
///
/// # Examples
///
/// ```
/// use option_bitfield::common::bit;
///
/// assert_eq!(bit::to_binary(0), "0");
/// assert_eq!(bit::to_binary(144), "10010000");
/// ```
pub fn to_binary(value: u64) -> String {
    format!("{:b}", value)
}

/// Parses a base-2 literal made of `0` and `1` only. Leading zeros are allowed.
///
/// # Examples
///
/// ```
/// use option_bitfield::common::bit;
///
/// assert_eq!(bit::parse_binary("1001"), Ok(9));
/// assert_eq!(bit::parse_binary("0001001"), Ok(9));
/// assert!(bit::parse_binary("").is_err());
/// assert!(bit::parse_binary("102").is_err());
/// assert!(bit::parse_binary("+1").is_err());
/// ```
pub fn parse_binary(s: &str) -> Result<u64, String> {
    if s.is_empty() {
        return Err("empty binary literal".to_string());
    }
    if let Some(c) = s.chars().find(|c| *c != '0' && *c != '1') {
        return Err(format!("invalid binary digit {:?} in '{}'", c, s));
    }

    // from_str_radix tolerates a leading '+', which the digit check above rejects
    u64::from_str_radix(s, 2)
        .map_err(|_| format!("'{}' exceeds {} bits", s, REGISTER_BITS))
}
