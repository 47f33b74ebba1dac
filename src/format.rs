// NØNOS Operating System
// Copyright (C) 2026 NØNOS Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Minimal printf-style interpreter used by the terminal.
//!
//! Recognized specifiers: `%c %s %u %d %i %b %B %x %X %n %%`. Unknown
//! specifiers are swallowed without output.

/// Longest 32-bit rendering: 32 binary digits and a sign.
pub const ITOA_CAPACITY: usize = 33;

const DIGITS: &[u8; 16] = b"0123456789abcdef";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg<'a> {
    Char(u8),
    Str(&'a str),
    Unsigned(u32),
    Signed(i32),
}

impl<'a> Arg<'a> {
    fn as_char(&self) -> Option<u8> {
        match *self {
            Arg::Char(c) => Some(c),
            Arg::Unsigned(v) => Some(v as u8),
            Arg::Signed(v) => Some(v as u8),
            Arg::Str(_) => None,
        }
    }

    fn as_unsigned(&self) -> Option<u32> {
        match *self {
            Arg::Char(c) => Some(c as u32),
            Arg::Unsigned(v) => Some(v),
            Arg::Signed(v) => Some(v as u32),
            Arg::Str(_) => None,
        }
    }

    fn as_signed(&self) -> Option<i32> {
        self.as_unsigned().map(|v| v as i32)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(s: &'a str) -> Self {
        Arg::Str(s)
    }
}

impl From<char> for Arg<'_> {
    fn from(c: char) -> Self {
        Arg::Char(if c.is_ascii() { c as u8 } else { b'?' })
    }
}

impl From<u32> for Arg<'_> {
    fn from(v: u32) -> Self {
        Arg::Unsigned(v)
    }
}

impl From<i32> for Arg<'_> {
    fn from(v: i32) -> Self {
        Arg::Signed(v)
    }
}

/// Renders `value` in `radix` (2..=16, lowercase) into `buf` and returns the
/// number of bytes written. Digits are produced least significant first and
/// then reversed in place. Other radices render nothing.
pub fn itoa(value: u32, radix: u32, negative: bool, buf: &mut [u8; ITOA_CAPACITY]) -> usize {
    if !(2..=16).contains(&radix) {
        return 0;
    }

    let mut len = 0;
    let mut rest = value;
    loop {
        buf[len] = DIGITS[(rest % radix) as usize];
        len += 1;
        rest /= radix;
        if rest == 0 {
            break;
        }
    }
    if negative {
        buf[len] = b'-';
        len += 1;
    }

    buf[..len].reverse();
    len
}

/// Interprets `format` against `args`, handing every output byte to `emit`.
///
/// Each value specifier consumes one argument slot whether or not the
/// argument fits it; a missing or mismatched argument produces no output.
pub fn write_formatted<E>(
    format: &str,
    args: &[Arg<'_>],
    mut emit: impl FnMut(u8) -> Result<(), E>,
) -> Result<(), E> {
    let mut bytes = format.bytes();
    let mut args = args.iter();
    let mut scratch = [0u8; ITOA_CAPACITY];

    while let Some(b) = bytes.next() {
        if b != b'%' {
            emit(b)?;
            continue;
        }
        let Some(spec) = bytes.next() else {
            break;
        };

        match spec {
            b'c' => {
                if let Some(c) = args.next().and_then(Arg::as_char) {
                    emit(c)?;
                }
            }
            b's' => {
                if let Some(Arg::Str(s)) = args.next() {
                    emit_all(&mut emit, s.as_bytes())?;
                }
            }
            b'u' => {
                if let Some(v) = args.next().and_then(Arg::as_unsigned) {
                    let len = itoa(v, 10, false, &mut scratch);
                    emit_all(&mut emit, &scratch[..len])?;
                }
            }
            b'd' | b'i' => {
                if let Some(v) = args.next().and_then(Arg::as_signed) {
                    let len = itoa(v.unsigned_abs(), 10, v < 0, &mut scratch);
                    emit_all(&mut emit, &scratch[..len])?;
                }
            }
            b'b' | b'B' | b'x' | b'X' => {
                if let Some(v) = args.next().and_then(Arg::as_unsigned) {
                    let (prefix, radix) = if spec == b'b' || spec == b'B' {
                        (b"0b", 2)
                    } else {
                        (b"0x", 16)
                    };
                    emit_all(&mut emit, prefix)?;
                    let len = itoa(v, radix, false, &mut scratch);
                    emit_all(&mut emit, &scratch[..len])?;
                }
            }
            b'n' => {
                let _ = args.next();
            }
            b'%' => emit(b'%')?,
            _ => {}
        }
    }
    Ok(())
}

fn emit_all<E>(emit: &mut impl FnMut(u8) -> Result<(), E>, bytes: &[u8]) -> Result<(), E> {
    for &b in bytes {
        emit(b)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(format: &str, args: &[Arg<'_>]) -> String {
        let mut out = Vec::new();
        let res: Result<(), ()> = write_formatted(format, args, |b| {
            out.push(b);
            Ok(())
        });
        assert!(res.is_ok());
        String::from_utf8(out).unwrap()
    }

    fn itoa_str(value: u32, radix: u32, negative: bool) -> String {
        let mut buf = [0u8; ITOA_CAPACITY];
        let len = itoa(value, radix, negative, &mut buf);
        String::from_utf8(buf[..len].to_vec()).unwrap()
    }

    #[test]
    fn test_itoa_radices() {
        assert_eq!(itoa_str(0, 10, false), "0");
        assert_eq!(itoa_str(1234, 10, false), "1234");
        assert_eq!(itoa_str(255, 16, false), "ff");
        assert_eq!(itoa_str(5, 2, false), "101");
        assert_eq!(itoa_str(5, 10, true), "-5");
    }

    #[test]
    fn test_itoa_extremes_fit() {
        assert_eq!(itoa_str(u32::MAX, 2, false).len(), 32);
        assert_eq!(itoa_str(i32::MIN.unsigned_abs(), 10, true), "-2147483648");
        assert_eq!(itoa_str(u32::MAX, 10, false), "4294967295");
    }

    #[test]
    fn test_itoa_signed_binary_fits() {
        let s = itoa_str(0x8000_0000, 2, true);
        assert_eq!(s.len(), ITOA_CAPACITY);
        assert!(s.starts_with("-1"));
        assert_eq!(itoa_str(u32::MAX, 2, true).len(), ITOA_CAPACITY);
    }

    #[test]
    fn test_itoa_rejects_radix() {
        assert_eq!(itoa_str(10, 17, false), "");
        assert_eq!(itoa_str(10, 1, false), "");
    }

    #[test]
    fn test_signed_and_hex() {
        assert_eq!(render("%d", &[Arg::Signed(-5)]), "-5");
        assert_eq!(render("%i", &[Arg::Signed(42)]), "42");
        assert_eq!(render("%x", &[Arg::Unsigned(255)]), "0xff");
        assert_eq!(render("%X", &[Arg::Unsigned(0xABC)]), "0xabc");
        assert_eq!(render("%b", &[Arg::Unsigned(5)]), "0b101");
        assert_eq!(render("%B", &[Arg::Unsigned(0)]), "0b0");
    }

    #[test]
    fn test_unsigned_reinterprets_negative() {
        assert_eq!(render("%u", &[Arg::Signed(-1)]), "4294967295");
        assert_eq!(render("%x", &[Arg::Signed(-1)]), "0xffffffff");
    }

    #[test]
    fn test_chars_and_strings() {
        assert_eq!(render("%c%c", &[Arg::Char(b'o'), 'k'.into()]), "ok");
        assert_eq!(render("<%s>", &["abc".into()]), "<abc>");
        assert_eq!(render("%s", &[Arg::Unsigned(3)]), "");
    }

    #[test]
    fn test_percent_and_unknown() {
        assert_eq!(render("%%", &[]), "%");
        assert_eq!(render("100%% sure", &[]), "100% sure");
        assert_eq!(render("a%qb", &[]), "ab");
        assert_eq!(render("tail%", &[]), "tail");
    }

    #[test]
    fn test_n_consumes_slot() {
        assert_eq!(render("%n%d", &[Arg::Signed(1), Arg::Signed(2)]), "2");
    }

    #[test]
    fn test_missing_argument_is_silent() {
        assert_eq!(render("[%d][%x]", &[]), "[][]");
    }

    #[test]
    fn test_emit_error_stops() {
        let mut count = 0;
        let res: Result<(), &str> = write_formatted("abcdef", &[], |_| {
            count += 1;
            if count == 3 {
                Err("full")
            } else {
                Ok(())
            }
        });
        assert_eq!(res, Err("full"));
        assert_eq!(count, 3);
    }
}
