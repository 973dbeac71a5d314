//! Human-readable booking numbers: `VR-12345678-AB12`.
//!
//! Not collision-free; uniqueness is enforced by the store on insert.

use chrono::Utc;
use rand::Rng;

use crate::domain::entities::BookingType;

const TIMESTAMP_DIGITS: usize = 8;
const SUFFIX_LENGTH: usize = 4;
const BASE36_UPPER: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub fn generate_booking_number(booking_type: BookingType) -> String {
    generate_booking_number_at(
        booking_type,
        Utc::now().timestamp_millis(),
        &mut rand::thread_rng(),
    )
}

/// Deterministic variant taking the clock reading and random source
pub fn generate_booking_number_at<R: Rng + ?Sized>(
    booking_type: BookingType,
    epoch_millis: i64,
    rng: &mut R,
) -> String {
    let millis = epoch_millis.unsigned_abs().to_string();
    let timestamp = &millis[millis.len().saturating_sub(TIMESTAMP_DIGITS)..];

    let suffix: String = (0..SUFFIX_LENGTH)
        .map(|_| BASE36_UPPER[rng.gen_range(0..BASE36_UPPER.len())] as char)
        .collect();

    format!("{}-{}-{}", booking_type.prefix(), timestamp, suffix)
}
