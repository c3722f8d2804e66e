//! CRC engines protecting decoded frame bits, one bit per byte.
//! Data frames carry CRC-5 (x^5 + x^3 + 1), voice frames CRC-3 (x^3 + x^2 + 1).

/// CRC-5 over all of `input`. Register starts at zero, no final inversion.
pub fn mk_crc5(input: &[u8]) -> [u8; 5] {
    let mut res = [0u8; 5];
    for &bit in input {
        let inv = bit ^ res[0];

        res[0] = res[1];
        res[1] = res[2];
        res[2] = res[3] ^ inv;
        res[3] = res[4];
        res[4] = inv;
    }
    res
}

/// CRC-3 over all of `input`. Register starts at zero, every bit inverted at the end.
pub fn mk_crc3(input: &[u8]) -> [u8; 3] {
    let mut res = [0u8; 3];
    for &bit in input {
        let inv = bit ^ res[0];

        res[0] = res[1];
        res[1] = res[2] ^ inv;
        res[2] = inv;
    }
    res.map(|b| b ^ 1)
}
