// SPDX-License-Identifier: LGPL-3.0-only

//! Text grammars accepted by [Color::parse].
//!
//! - `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (case-insensitive hex)
//! - `rgb(r, g, b)` and `rgba(r, g, b, a)` with integer channels and a fractional alpha
//! - `hsv(h, s%, v%)` and `hsva(h, s%, v%, a)` with hue in degrees (any real value)
//! - named colors from the web and Material palettes, see [crate::names]

use crate::channel::Channel;
use crate::color::Color;
use crate::error::{ColorError, ColorResult};
use crate::names;
use crate::space::Hsv;

impl Color {
    /// Parse a color from any supported text form.
    ///
    /// # Errors
    ///
    /// - [ColorError::InvalidFormat] when the text matches no grammar
    /// - [ColorError::OutOfRange] when a component lies outside its domain
    /// - [ColorError::UnknownName] when a named color lookup fails
    /// - [ColorError::UnsupportedLength] for hex strings of the wrong length
    pub fn parse(text: &str) -> ColorResult<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ColorError::invalid_format("color", text));
        }

        if trimmed.starts_with('#') {
            return Self::from_hex(trimmed);
        }

        if let Some((name, args)) = split_function(trimmed) {
            return match name.to_ascii_lowercase().as_str() {
                "rgb" => parse_rgb(trimmed, &args, false),
                "rgba" => parse_rgb(trimmed, &args, true),
                "hsv" => parse_hsv(trimmed, &args, false),
                "hsva" => parse_hsv(trimmed, &args, true),
                _ => Err(ColorError::invalid_format("color function", text)),
            };
        }

        if trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        {
            return names::lookup(trimmed).ok_or_else(|| ColorError::unknown_name(text));
        }

        Err(ColorError::invalid_format("color", text))
    }

    /// Non-failing counterpart of [Color::parse].
    pub fn try_parse(text: &str) -> Option<Self> {
        Self::parse(text).ok()
    }

    /// Parse a `#`-prefixed hex color of 3, 4, 6 or 8 digits.
    pub fn from_hex(text: &str) -> ColorResult<Self> {
        let digits = text
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ColorError::invalid_format("hex", text))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::invalid_format("hex", text));
        }

        let short = |i: usize| -> ColorResult<Channel> {
            let digit = digits[i..].chars().next().unwrap_or('?');
            Channel::from_hex_digit(digit).map_err(|_| ColorError::invalid_format("hex", text))
        };
        let pair = |i: usize| -> ColorResult<Channel> {
            Channel::from_hex_pair(&digits[i * 2..i * 2 + 2])
                .map_err(|_| ColorError::invalid_format("hex", text))
        };

        match digits.len() {
            3 => Ok(Self::new(short(0)?, short(1)?, short(2)?, Channel::MAX)),
            4 => Ok(Self::new(short(0)?, short(1)?, short(2)?, short(3)?)),
            6 => Ok(Self::new(pair(0)?, pair(1)?, pair(2)?, Channel::MAX)),
            8 => Ok(Self::new(pair(0)?, pair(1)?, pair(2)?, pair(3)?)),
            len => Err(ColorError::unsupported_length("hex", text, len)),
        }
    }

    /// Non-failing counterpart of [Color::from_hex].
    pub fn try_from_hex(text: &str) -> Option<Self> {
        Self::from_hex(text).ok()
    }
}

/// Split `name(a, b, c)` into its name and trimmed arguments.
fn split_function(text: &str) -> Option<(&str, Vec<&str>)> {
    let open = text.find('(')?;
    let inner = text.strip_suffix(')')?.get(open + 1..)?;
    let name = text[..open].trim();
    if name.is_empty() {
        return None;
    }
    Some((name, inner.split(',').map(str::trim).collect()))
}

fn parse_rgb(input: &str, args: &[&str], with_alpha: bool) -> ColorResult<Color> {
    let expected = if with_alpha { 4 } else { 3 };
    if args.len() != expected {
        return Err(ColorError::invalid_format(if with_alpha { "rgba" } else { "rgb" }, input));
    }

    let r = parse_byte("red", args[0])?;
    let g = parse_byte("green", args[1])?;
    let b = parse_byte("blue", args[2])?;
    let a = if with_alpha {
        Channel::from_unit(parse_alpha(args[3])?)
    } else {
        Channel::MAX
    };

    Ok(Color::new(r, g, b, a))
}

fn parse_hsv(input: &str, args: &[&str], with_alpha: bool) -> ColorResult<Color> {
    let expected = if with_alpha { 4 } else { 3 };
    if args.len() != expected {
        return Err(ColorError::invalid_format(if with_alpha { "hsva" } else { "hsv" }, input));
    }

    let hue_text = args[0]
        .strip_suffix("deg")
        .map(str::trim_end)
        .unwrap_or(args[0]);
    let h = parse_number("hue", hue_text)?;
    let s = parse_percentage("saturation", args[1])?;
    let v = parse_percentage("value", args[2])?;
    let color = Color::from_hsv(Hsv::new(h, s / 100.0, v / 100.0));

    if with_alpha {
        Ok(color.with_alpha(Channel::from_unit(parse_alpha(args[3])?)))
    } else {
        Ok(color)
    }
}

fn parse_number(param: &str, text: &str) -> ColorResult<f64> {
    let value: f64 = text
        .parse()
        .map_err(|_| ColorError::invalid_format(param, text))?;
    if !value.is_finite() {
        return Err(ColorError::out_of_range(param, text));
    }
    Ok(value)
}

fn parse_byte(param: &str, text: &str) -> ColorResult<Channel> {
    let value: i64 = text
        .parse()
        .map_err(|_| ColorError::invalid_format(param, text))?;
    u8::try_from(value)
        .map(Channel::new)
        .map_err(|_| ColorError::out_of_range(param, text))
}

fn parse_alpha(text: &str) -> ColorResult<f64> {
    let value = parse_number("alpha", text)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(ColorError::out_of_range("alpha", text));
    }
    Ok(value)
}

fn parse_percentage(param: &str, text: &str) -> ColorResult<f64> {
    let number = text.strip_suffix('%').map(str::trim_end).unwrap_or(text);
    let value = parse_number(param, number).map_err(|_| ColorError::invalid_format(param, text))?;
    if !(0.0..=100.0).contains(&value) {
        return Err(ColorError::out_of_range(param, text));
    }
    Ok(value)
}
