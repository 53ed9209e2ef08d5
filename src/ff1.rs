//! FF1 format-preserving encryption (NIST SP 800-38G, section 6.1).
//!
//! FF1 is a 10-round Feistel network over two numeral substrings. The round
//! function is a CBC-MAC of a fixed header `P` and a per-round block `Q`,
//! expanded by AES in counter fashion when more than 16 bytes are needed.
//!
//! Properties:
//! - Ciphertext length and radix equal those of the plaintext
//! - Tweak may have any length, including zero
//! - Radix between 2 and 62, minimum message length 2
//! - No authentication; equal plaintexts under the same (key, tweak) encrypt
//!   to equal ciphertexts

use aes::{Aes128, Aes192, Aes256};
use num_bigint::BigUint;
use tracing::trace;

use crate::block::{AesCipher, encrypt_block, new_cipher, prf};
use crate::common::{
    BLOCK_LENGTH, Direction, Error, add_mod, check_min_length, sub_mod, write_be,
};
use crate::radix::{
    check_digits, check_radix, digits_to_num, num_to_digits, parse_digits, radix_pow,
    render_digits,
};

/// Generic FF1 cipher parameterized by AES key size.
#[derive(Clone)]
pub struct Ff1<Aes: AesCipher> {
    ks: Aes,
    radix: u32,
}

/// FF1 with AES-128.
#[allow(non_camel_case_types)]
pub type Ff1_128 = Ff1<Aes128>;

/// FF1 with AES-192.
#[allow(non_camel_case_types)]
pub type Ff1_192 = Ff1<Aes192>;

/// FF1 with AES-256.
#[allow(non_camel_case_types)]
pub type Ff1_256 = Ff1<Aes256>;

/// Per-message parameters shared by every round.
struct Layout {
    u: usize,
    v: usize,
    b: usize,
    d: usize,
    modulus_u: BigUint,
    modulus_v: BigUint,
}

impl<Aes: AesCipher> Ff1<Aes> {
    /// Number of Feistel rounds.
    pub const ROUNDS: u8 = 10;

    /// Encryption key length in bytes.
    pub const KEY_LENGTH: usize = Aes::KEY_LENGTH.bytes();

    /// Maximum message length in symbols (the length field of `P` is 32 bits).
    pub const MAX_MESSAGE_LENGTH: usize = u32::MAX as usize;

    /// Initialize an FF1 cipher for the given key and radix.
    pub fn new(key: &[u8], radix: u32) -> Result<Self, Error> {
        check_radix(radix)?;
        Ok(Self {
            ks: new_cipher(key)?,
            radix,
        })
    }

    /// Radix this cipher was created for.
    pub fn radix(&self) -> u32 {
        self.radix
    }

    /// Encrypt a numeral string.
    pub fn encrypt(&self, plaintext: &str, tweak: &[u8]) -> Result<String, Error> {
        self.cipher_str(plaintext, tweak, Direction::Encrypt)
    }

    /// Decrypt a numeral string.
    pub fn decrypt(&self, ciphertext: &str, tweak: &[u8]) -> Result<String, Error> {
        self.cipher_str(ciphertext, tweak, Direction::Decrypt)
    }

    /// Encrypt digit values (each below the radix).
    pub fn encrypt_digits(&self, plaintext: &[u8], tweak: &[u8]) -> Result<Vec<u8>, Error> {
        self.cipher_digits(plaintext, tweak, Direction::Encrypt)
    }

    /// Decrypt digit values (each below the radix).
    pub fn decrypt_digits(&self, ciphertext: &[u8], tweak: &[u8]) -> Result<Vec<u8>, Error> {
        self.cipher_digits(ciphertext, tweak, Direction::Decrypt)
    }

    fn cipher_str(&self, src: &str, tweak: &[u8], direction: Direction) -> Result<String, Error> {
        check_min_length(src.chars().count())?;
        let digits = parse_digits(src, self.radix)?;
        let out = self.ff1(&digits, tweak, direction)?;
        Ok(render_digits(&out))
    }

    fn cipher_digits(
        &self,
        src: &[u8],
        tweak: &[u8],
        direction: Direction,
    ) -> Result<Vec<u8>, Error> {
        check_min_length(src.len())?;
        check_digits(src, self.radix)?;
        self.ff1(src, tweak, direction)
    }

    fn layout(&self, n: usize) -> Layout {
        let u = n / 2;
        let v = n - u;
        let modulus_u = radix_pow(self.radix, u);
        let modulus_v = radix_pow(self.radix, v);
        // ceil(v * log2(radix)) equals the bit length of radix^v - 1.
        let b = (&modulus_v - 1u32).bits().div_ceil(8) as usize;
        let d = 4 * b.div_ceil(4) + 4;
        Layout {
            u,
            v,
            b,
            d,
            modulus_u,
            modulus_v,
        }
    }

    /// The fixed first PRF block `P`.
    fn header(&self, u: usize, n: u32, t: u32) -> [u8; BLOCK_LENGTH] {
        let mut p = [0u8; BLOCK_LENGTH];
        p[0] = 1;
        p[1] = 2;
        p[2] = 1;
        p[3..6].copy_from_slice(&self.radix.to_be_bytes()[1..]);
        p[6] = Self::ROUNDS;
        p[7] = (u % 256) as u8;
        p[8..12].copy_from_slice(&n.to_be_bytes());
        p[12..16].copy_from_slice(&t.to_be_bytes());
        p
    }

    fn ff1(&self, src: &[u8], tweak: &[u8], direction: Direction) -> Result<Vec<u8>, Error> {
        let n = u32::try_from(src.len()).map_err(|_| Error::MessageTooLong {
            length: src.len(),
            maximum: Self::MAX_MESSAGE_LENGTH,
        })?;
        let t = u32::try_from(tweak.len()).map_err(|_| Error::InvalidTweakLength {
            expected: "fewer than 2^32 bytes",
            actual: tweak.len(),
        })?;

        let layout = self.layout(src.len());
        let (u, v, b) = (layout.u, layout.v, layout.b);

        // P || T || 0^pad || [i] || [NUM(B)]^b, rewritten in place every round.
        let pad = (BLOCK_LENGTH - (tweak.len() + b + 1) % BLOCK_LENGTH) % BLOCK_LENGTH;
        let mut pq = Vec::with_capacity(BLOCK_LENGTH + tweak.len() + pad + 1 + b);
        pq.extend_from_slice(&self.header(u, n, t));
        pq.extend_from_slice(tweak);
        pq.resize(pq.len() + pad + 1 + b, 0);

        let mut a = digits_to_num(&src[..u], self.radix);
        let mut bb = digits_to_num(&src[u..], self.radix);

        match direction {
            Direction::Encrypt => {
                for i in 0..Self::ROUNDS {
                    let y = self.round(&mut pq, &layout, i, &bb)?;
                    let c = add_mod(&a, &y, layout.modulus(i));
                    a = bb;
                    bb = c;
                }
            }
            Direction::Decrypt => {
                for i in (0..Self::ROUNDS).rev() {
                    let y = self.round(&mut pq, &layout, i, &a)?;
                    let c = sub_mod(&bb, &y, layout.modulus(i));
                    bb = a;
                    a = c;
                }
            }
        }

        let mut out = num_to_digits(&a, self.radix, u);
        out.extend(num_to_digits(&bb, self.radix, v));
        Ok(out)
    }

    /// Round function: derive `y` from the round index and one half.
    fn round(
        &self,
        pq: &mut [u8],
        layout: &Layout,
        i: u8,
        half: &BigUint,
    ) -> Result<BigUint, Error> {
        let len = pq.len();
        pq[len - layout.b - 1] = i;
        write_be(half, &mut pq[len - layout.b..])?;

        let r = prf(&self.ks, pq);

        let blocks = layout.d.div_ceil(BLOCK_LENGTH);
        let mut s = Vec::with_capacity(blocks * BLOCK_LENGTH);
        s.extend_from_slice(&r);
        let r_int = u128::from_be_bytes(r);
        for j in 1..blocks {
            let block = (r_int ^ j as u128).to_be_bytes();
            s.extend_from_slice(&encrypt_block(&self.ks, &block));
        }
        trace!(round = i, bytes = layout.d, "ff1 round");

        Ok(BigUint::from_bytes_be(&s[..layout.d]))
    }
}

impl Layout {
    fn modulus(&self, round: u8) -> &BigUint {
        if round % 2 == 0 {
            &self.modulus_u
        } else {
            &self.modulus_v
        }
    }
}
