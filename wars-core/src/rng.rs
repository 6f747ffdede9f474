/// Deterministic dice source: `xoshiro256**` seeded via SplitMix64.
#[derive(Clone, Copy, Debug)]
pub struct DiceRng {
    state: [u64; 4],
}

impl DiceRng {
    pub fn seed_from_u64(seed: u64) -> Self {
        let mut sm = SplitMix64 { state: seed };
        Self {
            state: [sm.next(), sm.next(), sm.next(), sm.next()],
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        let result = self.state[1].wrapping_mul(5).rotate_left(7).wrapping_mul(9);
        let t = self.state[1] << 17;

        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];

        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);

        result
    }

    /// One six-sided die, `1..=6`.
    pub fn d6(&mut self) -> u32 {
        // Lemire's multiply-shift; bias is negligible for six buckets.
        (((self.next_u64() >> 32) * 6) >> 32) as u32 + 1
    }

    /// Rolls `n` dice sorted high to low.
    pub fn roll_sorted(&mut self, n: u32) -> Vec<u32> {
        let mut dice: Vec<u32> = (0..n).map(|_| self.d6()).collect();
        dice.sort_unstable_by(|a, b| b.cmp(a));
        dice
    }
}

struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}
