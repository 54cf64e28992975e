//! Value rendering.
//!
//! This module provides the [`Renderer`], a serde `Serializer` that turns one
//! argument into its textual form. Which rule applies is decided by the serde
//! data model call the value makes, checked in a fixed priority order:
//!
//! 1. **Boolean**: `true` / `false`, whatever the flags say
//! 2. **Text and numbers**: strings and chars verbatim, numbers through the
//!    numeric settings (radix, precision, locale)
//! 3. **Pairs**: two-element tuples and map entries as `{A : B}`
//! 4. **Custom Display**: values serialized with `collect_str`, such as
//!    [`Output`](crate::Output), rendered by their own `Display` impl; text
//!    that reads as a number is then formatted like a native number
//! 5. **Sequences**: `[e0, e1, e2]`, `[]` when empty
//! 6. **Anything else**: the unknown marker `?`
//!
//! Composite values recurse through the same rules.
//!
//! ## Direct Renderer Usage
//!
//! ```rust
//! use percent_format::{OutputSettings, Renderer};
//! use serde::Serialize;
//!
//! let settings = OutputSettings::new();
//! let mut renderer = Renderer::new(&settings);
//!
//! vec![(2.0, true), (4.5, false)].serialize(&mut renderer).unwrap();
//! assert_eq!(renderer.into_inner(), "[{2 : true}, {4.5 : false}]");
//! ```

use crate::number;
use crate::{Error, OutputSettings, Result, UNKNOWN_MARKER};
use serde::{ser, Serialize};
use std::fmt::{self, Write};

/// Renders a single `Serialize` value into text under borrowed settings.
pub struct Renderer<'s> {
    output: String,
    settings: &'s OutputSettings,
}

impl<'s> Renderer<'s> {
    pub fn new(settings: &'s OutputSettings) -> Self {
        Renderer {
            output: String::with_capacity(32),
            settings,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    fn write_unknown(&mut self) {
        self.output.push(UNKNOWN_MARKER);
    }

    // Display text that is a number takes the native numeric rules; any
    // other text is written as-is.
    fn write_display<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + fmt::Display,
    {
        let mut text = String::new();
        write!(text, "{}", value)
            .map_err(|_| Error::custom("Display implementation returned an error"))?;

        if !number::write_numeric_text(&mut self.output, &text, self.settings) {
            self.output.push_str(&text);
        }
        Ok(())
    }
}

impl<'a, 's> ser::Serializer for &'a mut Renderer<'s> {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = SeqRenderer<'a, 's>;
    type SerializeTuple = TupleRenderer<'a, 's>;
    type SerializeTupleStruct = TupleRenderer<'a, 's>;
    type SerializeTupleVariant = OpaqueRenderer<'a, 's>;
    type SerializeMap = MapRenderer<'a, 's>;
    type SerializeStruct = OpaqueRenderer<'a, 's>;
    type SerializeStructVariant = OpaqueRenderer<'a, 's>;

    fn serialize_bool(self, v: bool) -> Result<Self::Ok> {
        self.output.push_str(if v { "true" } else { "false" });
        Ok(())
    }

    fn serialize_i8(self, v: i8) -> Result<Self::Ok> {
        number::write_signed(&mut self.output, v.into(), 8, self.settings);
        Ok(())
    }

    fn serialize_i16(self, v: i16) -> Result<Self::Ok> {
        number::write_signed(&mut self.output, v.into(), 16, self.settings);
        Ok(())
    }

    fn serialize_i32(self, v: i32) -> Result<Self::Ok> {
        number::write_signed(&mut self.output, v.into(), 32, self.settings);
        Ok(())
    }

    fn serialize_i64(self, v: i64) -> Result<Self::Ok> {
        number::write_signed(&mut self.output, v.into(), 64, self.settings);
        Ok(())
    }

    fn serialize_i128(self, v: i128) -> Result<Self::Ok> {
        number::write_signed(&mut self.output, v, 128, self.settings);
        Ok(())
    }

    fn serialize_u8(self, v: u8) -> Result<Self::Ok> {
        self.serialize_u128(v.into())
    }

    fn serialize_u16(self, v: u16) -> Result<Self::Ok> {
        self.serialize_u128(v.into())
    }

    fn serialize_u32(self, v: u32) -> Result<Self::Ok> {
        self.serialize_u128(v.into())
    }

    fn serialize_u64(self, v: u64) -> Result<Self::Ok> {
        self.serialize_u128(v.into())
    }

    fn serialize_u128(self, v: u128) -> Result<Self::Ok> {
        number::write_unsigned(&mut self.output, v, self.settings);
        Ok(())
    }

    fn serialize_f32(self, v: f32) -> Result<Self::Ok> {
        self.serialize_f64(v.into())
    }

    fn serialize_f64(self, v: f64) -> Result<Self::Ok> {
        number::write_float(&mut self.output, v, self.settings);
        Ok(())
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok> {
        self.output.push(v);
        Ok(())
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok> {
        self.output.push_str(v);
        Ok(())
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Self::Ok> {
        use ser::SerializeSeq;
        let mut seq = self.serialize_seq(Some(v.len()))?;
        for byte in v {
            seq.serialize_element(byte)?;
        }
        seq.end()
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        self.write_unknown();
        Ok(())
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        self.write_unknown();
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok> {
        self.serialize_unit()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok> {
        self.serialize_str(variant)
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        self.output.push('[');
        Ok(SeqRenderer {
            ser: self,
            first: true,
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        let pair = len == 2;
        self.output.push(if pair { '{' } else { '[' });
        Ok(TupleRenderer {
            ser: self,
            pair,
            index: 0,
        })
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_tuple(len)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Ok(OpaqueRenderer { ser: self })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        self.output.push('[');
        Ok(MapRenderer {
            ser: self,
            first: true,
        })
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Ok(OpaqueRenderer { ser: self })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Ok(OpaqueRenderer { ser: self })
    }

    fn collect_str<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + fmt::Display,
    {
        self.write_display(value)
    }
}

/// Comma separated elements in square brackets.
pub struct SeqRenderer<'a, 's> {
    ser: &'a mut Renderer<'s>,
    first: bool,
}

impl<'a, 's> ser::SerializeSeq for SeqRenderer<'a, 's> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        if !self.first {
            self.ser.output.push_str(", ");
        }
        self.first = false;
        value.serialize(&mut *self.ser)
    }

    fn end(self) -> Result<Self::Ok> {
        self.ser.output.push(']');
        Ok(())
    }
}

/// A pair when exactly two fields were announced, a sequence otherwise.
pub struct TupleRenderer<'a, 's> {
    ser: &'a mut Renderer<'s>,
    pair: bool,
    index: usize,
}

impl<'a, 's> TupleRenderer<'a, 's> {
    fn element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        if self.index > 0 {
            self.ser
                .output
                .push_str(if self.pair { " : " } else { ", " });
        }
        self.index += 1;
        value.serialize(&mut *self.ser)
    }

    fn close(self) -> Result<()> {
        self.ser.output.push(if self.pair { '}' } else { ']' });
        Ok(())
    }
}

impl<'a, 's> ser::SerializeTuple for TupleRenderer<'a, 's> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.close()
    }
}

impl<'a, 's> ser::SerializeTupleStruct for TupleRenderer<'a, 's> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.close()
    }
}

/// A sequence of `{key : value}` pairs.
pub struct MapRenderer<'a, 's> {
    ser: &'a mut Renderer<'s>,
    first: bool,
}

impl<'a, 's> ser::SerializeMap for MapRenderer<'a, 's> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        if !self.first {
            self.ser.output.push_str(", ");
        }
        self.first = false;
        self.ser.output.push('{');
        key.serialize(&mut *self.ser)
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.ser.output.push_str(" : ");
        value.serialize(&mut *self.ser)?;
        self.ser.output.push('}');
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        self.ser.output.push(']');
        Ok(())
    }
}

/// Named-field structs and data-carrying enum variants have no textual
/// form: fields are skipped and the whole value renders as `?`.
pub struct OpaqueRenderer<'a, 's> {
    ser: &'a mut Renderer<'s>,
}

impl<'a, 's> OpaqueRenderer<'a, 's> {
    fn close(self) -> Result<()> {
        self.ser.write_unknown();
        Ok(())
    }
}

impl<'a, 's> ser::SerializeTupleVariant for OpaqueRenderer<'a, 's> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, _value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        self.close()
    }
}

impl<'a, 's> ser::SerializeStruct for OpaqueRenderer<'a, 's> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, _key: &'static str, _value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        self.close()
    }
}

impl<'a, 's> ser::SerializeStructVariant for OpaqueRenderer<'a, 's> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, _key: &'static str, _value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        self.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FmtFlags;
    use std::collections::BTreeMap;

    fn render<T: ?Sized + Serialize>(value: &T) -> String {
        let settings = OutputSettings::new();
        let mut renderer = Renderer::new(&settings);
        value.serialize(&mut renderer).unwrap();
        renderer.into_inner()
    }

    #[derive(Serialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize)]
    struct Meters(f64);

    #[derive(Serialize)]
    struct Span(u32, u32);

    #[derive(Serialize)]
    enum Shape {
        Empty,
        Circle(f64),
        Rect(f64, f64),
        Named { name: String },
    }

    #[test]
    fn test_bool_ignores_boolalpha() {
        assert_eq!(render(&true), "true");
        assert_eq!(render(&false), "false");

        let settings = OutputSettings::new().with_flags(FmtFlags::empty());
        let mut renderer = Renderer::new(&settings);
        true.serialize(&mut renderer).unwrap();
        assert_eq!(renderer.into_inner(), "true");
    }

    #[test]
    fn test_text_is_verbatim() {
        assert_eq!(render("a \"quoted\", text"), "a \"quoted\", text");
        assert_eq!(render(&'x'), "x");
        assert_eq!(render(&String::new()), "");
    }

    #[test]
    fn test_pairs() {
        assert_eq!(render(&(2.0, true)), "{2 : true}");
        assert_eq!(render(&("key", vec![1, 2])), "{key : [1, 2]}");
        assert_eq!(render(&Span(3, 7)), "{3 : 7}");
    }

    #[test]
    fn test_sequences() {
        assert_eq!(render(&vec!["apple", "pear", "banana"]), "[apple, pear, banana]");
        assert_eq!(render(&Vec::<i32>::new()), "[]");
        assert_eq!(render(&vec![vec![1], vec![], vec![2, 3]]), "[[1], [], [2, 3]]");
        assert_eq!(render(&(1, 2, 3)), "[1, 2, 3]");
        assert_eq!(render(&[1u8, 2, 3][..]), "[1, 2, 3]");
    }

    #[test]
    fn test_two_element_array_is_a_pair() {
        assert_eq!(render(&[1, 2]), "{1 : 2}");
        assert_eq!(render(&[1, 2][..]), "[1, 2]");
    }

    #[test]
    fn test_map_renders_entries_as_pairs() {
        let mut map = BTreeMap::new();
        map.insert(1, "one");
        map.insert(2, "two");
        assert_eq!(render(&map), "[{1 : one}, {2 : two}]");
        assert_eq!(render(&BTreeMap::<i32, i32>::new()), "[]");
    }

    #[test]
    fn test_unknown_shapes() {
        assert_eq!(render(&Point { x: 1, y: 2 }), "?");
        assert_eq!(render(&()), "?");
        assert_eq!(render(&None::<i32>), "?");
        assert_eq!(render(&vec![Some(1), None, Some(3)]), "[1, ?, 3]");
        assert_eq!(render(&Shape::Rect(1.0, 2.0)), "?");
        assert_eq!(
            render(&Shape::Named {
                name: "n".to_string()
            }),
            "?"
        );
    }

    #[test]
    fn test_transparent_wrappers() {
        assert_eq!(render(&Meters(1.5)), "1.5");
        assert_eq!(render(&Shape::Circle(0.25)), "0.25");
        assert_eq!(render(&Shape::Empty), "Empty");
        assert_eq!(render(&Some("x")), "x");
    }

    #[test]
    fn test_collect_str_formats_numeric_text() {
        struct Celsius(f64);

        impl fmt::Display for Celsius {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} C", self.0)
            }
        }

        fn collect<T: fmt::Display>(value: &T, settings: &OutputSettings) -> String {
            let mut renderer = Renderer::new(settings);
            ser::Serializer::collect_str(&mut renderer, value).unwrap();
            renderer.into_inner()
        }

        let fixed = OutputSettings::new()
            .with_flags(FmtFlags::FIXED)
            .with_precision(2);
        assert_eq!(collect(&Celsius(21.5), &fixed), "21.5 C");
        assert_eq!(collect(&21.5, &fixed), "21.50");

        let showpos = OutputSettings::new().with_flags(FmtFlags::SHOWPOS);
        assert_eq!(collect(&7, &showpos), "+7");
        assert_eq!(collect(&(1.0f64 / 3.0), &OutputSettings::new()), "0.333333");
    }
}
