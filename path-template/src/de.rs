use serde::{
    de::{
        value::{BorrowedStrDeserializer, Error, MapDeserializer, SeqDeserializer},
        Deserializer, Error as _, IntoDeserializer, Unexpected, Visitor,
    },
    forward_to_deserialize_any,
};

use crate::params::Params;

/// Deserializer over the decoded values of a successful match.
///
/// * Structs and maps are filled by parameter name; unknown fields are left to the target type.
///
/// * Sequences and tuples are filled by position, in placeholder order.
///
/// * Scalars, options, newtypes and unit-only enums are read from the single parameter and fail
///   when the match produced any other number of values.
///
/// * Unit always succeeds, which lets `()` stand for the result of a static template.
pub(crate) struct ParamsDeserializer<'de> {
    params: &'de Params,
}

impl<'de> ParamsDeserializer<'de> {
    pub(crate) fn new(params: &'de Params) -> Self {
        ParamsDeserializer { params }
    }

    fn entries(&self) -> impl Iterator<Item = (Text<'de>, Text<'de>)> {
        let params: &'de Params = self.params;
        params
            .iter()
            .map(|(name, value)| (Text(name), Text(value)))
    }

    fn values(&self) -> impl Iterator<Item = Text<'de>> {
        let params: &'de Params = self.params;
        params.iter().map(|(_, value)| Text(value))
    }

    fn single(&self) -> Result<Text<'de>, Error> {
        let mut values = self.values();

        match (values.next(), self.params.len()) {
            (Some(value), 1) => Ok(value),
            (_, len) => Err(Error::invalid_length(len, &"exactly one path parameter")),
        }
    }
}

macro_rules! forward_to_single {
    ($($method:ident)*) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value, Self::Error>
            where
                V: Visitor<'de>,
            {
                self.single()?.$method(visitor)
            }
        )*
    };
}

impl<'de> Deserializer<'de> for ParamsDeserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.deserialize_map(visitor)
    }

    fn deserialize_map<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        let mut map: MapDeserializer<'de, _, Error> = MapDeserializer::new(self.entries());
        let value = visitor.visit_map(&mut map)?;
        map.end()?;
        Ok(value)
    }

    fn deserialize_struct<V>(
        self,
        _: &'static str,
        _: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.deserialize_map(visitor)
    }

    fn deserialize_seq<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        let mut seq: SeqDeserializer<_, Error> = SeqDeserializer::new(self.values());
        let value = visitor.visit_seq(&mut seq)?;
        seq.end()?;
        Ok(value)
    }

    fn deserialize_tuple<V>(self, _: usize, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V>(
        self,
        _: &'static str,
        _: usize,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_unit<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }

    fn deserialize_unit_struct<V>(
        self,
        _: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_unit()
    }

    fn deserialize_newtype_struct<V>(
        self,
        _: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        self.single()?.deserialize_enum(name, variants, visitor)
    }

    forward_to_single! {
        deserialize_bool
        deserialize_i8 deserialize_i16 deserialize_i32 deserialize_i64
        deserialize_u8 deserialize_u16 deserialize_u32 deserialize_u64
        deserialize_f32 deserialize_f64
        deserialize_char deserialize_str deserialize_string
        deserialize_bytes deserialize_byte_buf
        deserialize_option
    }

    forward_to_deserialize_any! {
        identifier ignored_any
    }
}

/// A parameter name or value, already percent-decoded.
struct Text<'de>(&'de str);

impl<'de> IntoDeserializer<'de, Error> for Text<'de> {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self::Deserializer {
        self
    }
}

macro_rules! forward_parsed_text {
    ($($ty:ident => $method:ident => $visit:ident,)*) => {
        $(
            fn $method<V>(self, visitor: V) -> Result<V::Value, Self::Error>
            where
                V: Visitor<'de>,
            {
                match self.0.parse::<$ty>() {
                    Ok(val) => visitor.$visit(val),
                    Err(_) => Err(Error::invalid_value(Unexpected::Str(self.0), &visitor)),
                }
            }
        )*
    };
}

impl<'de> Deserializer<'de> for Text<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        BorrowedStrDeserializer::new(self.0).deserialize_any(visitor)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(
        self,
        _: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _: &'static str,
        _: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        // unit variants only
        visitor.visit_enum(self.0.into_deserializer())
    }

    forward_parsed_text! {
        bool => deserialize_bool => visit_bool,
        i8 => deserialize_i8 => visit_i8,
        i16 => deserialize_i16 => visit_i16,
        i32 => deserialize_i32 => visit_i32,
        i64 => deserialize_i64 => visit_i64,
        u8 => deserialize_u8 => visit_u8,
        u16 => deserialize_u16 => visit_u16,
        u32 => deserialize_u32 => visit_u32,
        u64 => deserialize_u64 => visit_u64,
        f32 => deserialize_f32 => visit_f32,
        f64 => deserialize_f64 => visit_f64,
        char => deserialize_char => visit_char,
    }

    forward_to_deserialize_any! {
        str string bytes byte_buf unit unit_struct seq tuple tuple_struct map struct
        identifier ignored_any
    }
}
