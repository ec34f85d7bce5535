//! Client-generated arithmetic captcha for the login shell.

use rand::Rng;

/// One arithmetic challenge. Operands are 1-20 for addition and
/// subtraction (operands swapped so the answer is never negative) and
/// 1-10 for multiplication.
#[derive(Debug, Clone)]
pub struct Captcha {
    prompt: String,
    answer: u32,
}

impl Captcha {
    /// Draw a fresh challenge.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.gen_range(0_u8..3) {
            0 => {
                let a = rng.gen_range(1_u32..=20);
                let b = rng.gen_range(1_u32..=20);
                Captcha {
                    prompt: format!("{a} + {b} = ?"),
                    answer: a.saturating_add(b),
                }
            }
            1 => {
                let mut a = rng.gen_range(1_u32..=20);
                let mut b = rng.gen_range(1_u32..=20);
                if a < b {
                    std::mem::swap(&mut a, &mut b);
                }
                Captcha {
                    prompt: format!("{a} - {b} = ?"),
                    answer: a.saturating_sub(b),
                }
            }
            _ => {
                let a = rng.gen_range(1_u32..=10);
                let b = rng.gen_range(1_u32..=10);
                Captcha {
                    prompt: format!("{a} × {b} = ?"),
                    answer: a.saturating_mul(b),
                }
            }
        }
    }

    /// The challenge text shown next to the answer field.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Check a typed answer.
    #[must_use]
    pub fn check(&self, input: &str) -> bool {
        input
            .trim()
            .parse::<u32>()
            .is_ok_and(|value| value == self.answer)
    }
}
