use std::thread::sleep;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks a delay in `[min_delay, max_delay)` milliseconds.
pub fn random_delay_ms(min_delay: u64, max_delay: u64) -> u64 {
    if max_delay <= min_delay {
        return min_delay;
    }
    let mut rng = StdRng::from_entropy();
    rng.gen_range(min_delay..max_delay)
}

/// Blocks the current thread for a random delay between requests.
pub fn generate_random_delay(min_delay: u64, max_delay: u64) {
    let delay = random_delay_ms(min_delay, max_delay);
    if delay > 0 {
        sleep(Duration::from_millis(delay));
    }
}
