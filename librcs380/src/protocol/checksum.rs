// librcs380/src/protocol/checksum.rs

/// Length checksum: `(len + lcs) mod 256 == 0`
pub fn lcs(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Data checksum over the frame payload (direction byte, code and data):
/// `(sum(payload) + dcs) mod 256 == 0`
pub fn dcs(payload: &[u8]) -> u8 {
    0u8.wrapping_sub(sum(payload))
}

/// True when `len` and `lcs` satisfy the length checksum relation.
pub fn lcs_valid(len: u8, lcs: u8) -> bool {
    len.wrapping_add(lcs) == 0
}

/// True when `payload` and `dcs` satisfy the data checksum relation.
pub fn dcs_valid(payload: &[u8], dcs: u8) -> bool {
    sum(payload).wrapping_add(dcs) == 0
}

fn sum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
}
