//! # Byte Sets
//!
//! The engine matches bytes; every literal and bracket expression
//! lowers to a [`ByteSet`].

use core::fmt;

/// POSIX bracket class names, as in `[:alpha:]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum NamedClass {
    /// `[:alnum:]`
    Alnum,
    /// `[:alpha:]`
    Alpha,
    /// `[:blank:]`
    Blank,
    /// `[:cntrl:]`
    Cntrl,
    /// `[:digit:]`
    Digit,
    /// `[:graph:]`
    Graph,
    /// `[:lower:]`
    Lower,
    /// `[:print:]`
    Print,
    /// `[:punct:]`
    Punct,
    /// `[:space:]`
    Space,
    /// `[:upper:]`
    Upper,
    /// `[:xdigit:]`
    Xdigit,
}

impl NamedClass {
    /// Does the byte belong to this class?
    pub fn contains(
        self,
        byte: u8,
    ) -> bool {
        match self {
            Self::Alnum => byte.is_ascii_alphanumeric(),
            Self::Alpha => byte.is_ascii_alphabetic(),
            Self::Blank => byte == b' ' || byte == b'\t',
            Self::Cntrl => byte.is_ascii_control(),
            Self::Digit => byte.is_ascii_digit(),
            Self::Graph => byte.is_ascii_graphic(),
            Self::Lower => byte.is_ascii_lowercase(),
            Self::Print => byte.is_ascii_graphic() || byte == b' ',
            Self::Punct => byte.is_ascii_punctuation(),
            // `is_ascii_whitespace` omits vertical tab.
            Self::Space => byte.is_ascii_whitespace() || byte == 0x0B,
            Self::Upper => byte.is_ascii_uppercase(),
            Self::Xdigit => byte.is_ascii_hexdigit(),
        }
    }
}

/// Is `byte` a word byte (`[[:alnum:]_]`)?
#[inline]
pub fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// A set of byte values.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ByteSet([u64; 4]);

impl ByteSet {
    /// The empty set.
    pub const EMPTY: Self = Self([0; 4]);

    /// The set of all bytes.
    pub const FULL: Self = Self([u64::MAX; 4]);

    /// A set holding exactly one byte.
    pub fn singleton(byte: u8) -> Self {
        let mut set = Self::EMPTY;
        set.insert(byte);
        set
    }

    /// A set holding the inclusive range `lo..=hi`.
    pub fn range(
        lo: u8,
        hi: u8,
    ) -> Self {
        let mut set = Self::EMPTY;
        set.insert_range(lo, hi);
        set
    }

    /// The bytes of a named class.
    pub fn named(class: NamedClass) -> Self {
        let mut set = Self::EMPTY;
        for byte in 0..=u8::MAX {
            if class.contains(byte) {
                set.insert(byte);
            }
        }
        set
    }

    /// The `\w` set.
    pub fn word() -> Self {
        let mut set = Self::named(NamedClass::Alnum);
        set.insert(b'_');
        set
    }

    /// Is `byte` in the set?
    #[inline]
    pub fn contains(
        &self,
        byte: u8,
    ) -> bool {
        self.0[(byte >> 6) as usize] & (1u64 << (byte & 63)) != 0
    }

    /// Add one byte.
    #[inline]
    pub fn insert(
        &mut self,
        byte: u8,
    ) {
        self.0[(byte >> 6) as usize] |= 1u64 << (byte & 63);
    }

    /// Remove one byte.
    #[inline]
    pub fn remove(
        &mut self,
        byte: u8,
    ) {
        self.0[(byte >> 6) as usize] &= !(1u64 << (byte & 63));
    }

    /// Add the inclusive range `lo..=hi`.
    pub fn insert_range(
        &mut self,
        lo: u8,
        hi: u8,
    ) {
        for byte in lo..=hi {
            self.insert(byte);
        }
    }

    /// Add every byte of `other`.
    pub fn union(
        &mut self,
        other: &Self,
    ) {
        for (a, b) in self.0.iter_mut().zip(other.0.iter()) {
            *a |= *b;
        }
    }

    /// Flip membership of every byte.
    pub fn negate(&mut self) {
        for word in self.0.iter_mut() {
            *word = !*word;
        }
    }

    /// Add the other ASCII case of every ASCII letter in the set.
    pub fn case_fold(&mut self) {
        for byte in b'a'..=b'z' {
            let upper = byte.to_ascii_uppercase();
            if self.contains(byte) || self.contains(upper) {
                self.insert(byte);
                self.insert(upper);
            }
        }
    }

    /// Number of bytes in the set.
    pub fn len(&self) -> usize {
        self.0.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Is the set empty?
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|w| *w == 0)
    }

    /// The single member, if the set has exactly one.
    pub fn as_singleton(&self) -> Option<u8> {
        if self.len() == 1 {
            self.iter().next()
        } else {
            None
        }
    }

    /// Iterate the members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(move |b| self.contains(*b))
    }
}

impl fmt::Debug for ByteSet {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "[")?;
        let mut bytes = self.iter().peekable();
        while let Some(lo) = bytes.next() {
            let mut hi = lo;
            while bytes.peek() == Some(&hi.wrapping_add(1)) && hi < u8::MAX {
                hi = bytes.next().unwrap_or(hi);
            }
            if lo == hi {
                write!(f, "{}", lo.escape_ascii())?;
            } else {
                write!(f, "{}-{}", lo.escape_ascii(), hi.escape_ascii())?;
            }
        }
        write!(f, "]")
    }
}

impl fmt::Display for ByteSet {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
