/// Number of trellis states, two bits of encoder memory
const NUM_STATES: usize = 4;

/// Longest block the decoder handles, in message bits
pub const MAX_STEPS: usize = 50;

/// Path metric assigned to states that are not reachable
const METRIC_INF: u32 = 9999;

/// Expected encoder output for each transition, indexed by `(prev_state << 1) | input_bit`.
/// Bit 0 is the first coded bit of the pair, bit 1 the second.
/// This corresponds to generators 7 and 5 over (input, b[i-1], b[i-2]).
const OUTPUT_TABLE: [u8; 2 * NUM_STATES] = [0, 3, 1, 2, 3, 0, 2, 1];

/// Hard decision Viterbi decoder for the tail-biting rate-1/2 code of the frame.
///
/// The encoder state at the block boundary is unknown, so the trellis is run once
/// for each possible boundary state and the hypothesis with the smallest
/// accumulated Hamming distance wins.
///
/// Decodes `dec.len()` message bits from the first `2 * dec.len()` entries of `in_bits`.
/// Returns the Hamming distance between the input and the chosen code word,
/// which is the number of bit errors corrected.
pub fn frame_viterbi(dec: &mut [u8], in_bits: &[u8]) -> u32 {
    let size = dec.len();
    assert!(size >= 2 && size <= MAX_STEPS, "frame_viterbi: invalid block size {}", size);
    assert!(in_bits.len() >= 2 * size, "frame_viterbi: in_bits too short");

    let mut min_metric = u32::MAX;
    for s in 0..NUM_STATES {
        // Predecessor state for each (position, state)
        let mut back = [[0u8; NUM_STATES]; MAX_STEPS];
        let mut metrics = [METRIC_INF; NUM_STATES];
        metrics[s] = 0;

        for p in (0..size).rev() {
            let mut new_metrics = [METRIC_INF; NUM_STATES];
            for (u, &metric) in metrics.iter().enumerate() {
                for x in 0..2 {
                    let v = (u << 1) | x;
                    let e = OUTPUT_TABLE[v];
                    let mut r = metric;
                    if in_bits[2 * p] != (e & 1) {
                        r += 1;
                    }
                    if in_bits[2 * p + 1] != ((e >> 1) & 1) {
                        r += 1;
                    }
                    let next = v % NUM_STATES;
                    if new_metrics[next] > r {
                        new_metrics[next] = r;
                        back[p][next] = u as u8;
                    }
                }
            }
            metrics = new_metrics;
        }

        if min_metric > metrics[s] {
            min_metric = metrics[s];
            let mut z = s;
            for p in 0..size {
                dec[(size + p - 2) % size] = (z & 1) as u8;
                z = back[p][z] as usize;
            }
        }
    }

    tracing::trace!("frame_viterbi: size {} distance {}", size, min_metric);
    min_metric
}
