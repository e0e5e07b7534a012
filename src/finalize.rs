//! Finalize and report (C6): decode packed accumulator slots back into
//! query-level rows, sort them per the query's ordering, and print the
//! result in the engine's fixed truncated form.

use crate::accumulator::Accumulator;

/// Decodes every present slot of `acc` into a `(key, sum)` pair via
/// `decode`, which inverts the query's bit-packing for index `idx`. Output
/// is in slot-index order; callers sort afterward per their query's order.
pub fn finalize<K, Decode>(acc: &Accumulator, decode: Decode) -> Vec<(K, i64)>
where
    Decode: Fn(usize) -> K,
{
    acc.present_slots().map(|(idx, sum)| (decode(idx), sum)).collect()
}

/// Prints `rows` to stdout in the engine's fixed truncated form: the first
/// row, an ellipsis line if there are three or more rows, and the last row.
/// Zero rows print nothing; one or two rows print in full.
pub fn print_result<R: std::fmt::Display>(rows: &[R]) {
    match rows.len() {
        0 => {}
        1 => println!("{}", rows[0]),
        2 => {
            println!("{}", rows[0]);
            println!("{}", rows[1]);
        }
        _ => {
            println!("{}", rows[0]);
            println!("...");
            println!("{}", rows[rows.len() - 1]);
        }
    }
}
