//! Fixed-point decoding of chain-native integer values
//!
//! Chain balances arrive as hex-encoded integers scaled by `10^decimals`.
//! Division is done on `U256` so 18-decimal values never lose precision.

use alloy_primitives::U256;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UnitsError {
	#[error("malformed hex value: {0}")]
	MalformedHex(String),
}

/// Convert a hex-encoded unsigned integer into a decimal string scaled down
/// by `10^decimals`, with trailing fractional zeros stripped.
///
/// `0x14d1120d7b160000` with 18 decimals renders as `"1.5"`.
pub fn format_units(hex_value: &str, decimals: u8) -> Result<String, UnitsError> {
	let digits = hex_value
		.trim()
		.strip_prefix("0x")
		.or_else(|| hex_value.trim().strip_prefix("0X"))
		.unwrap_or_else(|| hex_value.trim());

	let raw = U256::from_str_radix(digits, 16)
		.map_err(|_| UnitsError::MalformedHex(hex_value.to_string()))?;

	let unit = U256::from(10u64).pow(U256::from(decimals));
	let whole = raw / unit;
	let fraction = raw % unit;

	if fraction.is_zero() {
		return Ok(whole.to_string());
	}

	let padded = format!("{:0>width$}", fraction.to_string(), width = decimals as usize);
	let trimmed = padded.trim_end_matches('0');
	Ok(format!("{whole}.{trimmed}"))
}
