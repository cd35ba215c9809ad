macro_rules! byte_map {
    // ===== 256 lookup table =====
    {
        $(#[$meta:meta])*
        $vis:vis const fn $fn_id:ident($byte:ident:$u8:ty) { $e:expr }
    } => {
        $(#[$meta])*
        $vis const fn $fn_id($byte: $u8) -> bool {
            static PAT: [bool; 256] = {
                let mut bytes = [false; 256];
                let mut $byte = 0u8;
                const fn filter($byte: $u8) -> bool {
                    $e
                }
                loop {
                    bytes[$byte as usize] = filter($byte);
                    if $byte == 255 {
                        break;
                    }
                    $byte += 1;
                }
                bytes
            };
            // SAFETY: the pattern size is equal to u8::MAX
            unsafe { *PAT.as_ptr().add($byte as usize) }
        }
    };
}

// ===== Blocks =====

byte_map! {
    /// CHAR = any 7-bit US-ASCII octet (0..=127)
    #[inline(always)]
    pub const fn is_char(byte: u8) {
        byte <= 127
    }
}

byte_map! {
    /// CTL = octets 0..=31 and DEL (127)
    #[inline(always)]
    pub const fn is_ctl(byte: u8) {
        byte <= 31 || byte == 127
    }
}

byte_map! {
    /// tspecials = "(" / ")" / "<" / ">" / "@" / "," / ";" / ":"
    ///           / "\" / <"> / "/" / "[" / "]" / "?" / "="
    ///           / "{" / "}" / SP / HT
    #[inline(always)]
    pub const fn is_tspecial(byte: u8) {
        matches!(
            byte,
            | b'(' | b')' | b'<' | b'>' | b'@' | b',' | b';' | b':'
            | b'\\' | b'"' | b'/' | b'[' | b']' | b'?' | b'='
            | b'{' | b'}' | b' ' | b'\t'
        )
    }
}

byte_map! {
    /// DIGIT = "0".."9"
    #[inline(always)]
    pub const fn is_digit(byte: u8) {
        byte.is_ascii_digit()
    }
}

byte_map! {
    /// token = 1*<any CHAR except CTLs or tspecials>
    ///
    /// Legal in a method or header field name.
    #[inline(always)]
    pub const fn is_token(byte: u8) {
        is_char(byte) && !is_ctl(byte) && !is_tspecial(byte)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_char() {
        assert!(is_char(0));
        assert!(is_char(b'A'));
        assert!(is_char(127));
        assert!(!is_char(128));
        assert!(!is_char(255));
    }

    #[test]
    fn test_ctl() {
        assert!(is_ctl(0));
        assert!(is_ctl(b'\r'));
        assert!(is_ctl(b'\n'));
        assert!(is_ctl(b'\t'));
        assert!(is_ctl(31));
        assert!(is_ctl(127));
        assert!(!is_ctl(b' '));
        assert!(!is_ctl(b'G'));
    }

    #[test]
    fn test_tspecial() {
        for byte in br#"()<>@,;:\"/[]?={} "# {
            assert!(is_tspecial(*byte), "{:?}", *byte as char);
        }
        assert!(is_tspecial(b'\t'));
        assert!(!is_tspecial(b'-'));
        assert!(!is_tspecial(b'_'));
        assert!(!is_tspecial(b'G'));
    }

    #[test]
    fn test_token() {
        for byte in b"GET-POST_x.0~!" {
            assert!(is_token(*byte), "{:?}", *byte as char);
        }
        assert!(!is_token(b' '));
        assert!(!is_token(b':'));
        assert!(!is_token(b'/'));
        assert!(!is_token(0x01));
        assert!(!is_token(128));
    }
}
