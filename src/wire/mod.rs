//! PostgreSQL wire binding for `agtype` columns.
//!
//! The server only ever exchanges agtype as its canonical text. In binary
//! transfer mode that text sits behind a single format-version byte; the
//! driver always uses binary mode, so [`FromSql`] and [`ToSql`] go through
//! the framed form.

pub mod rows;

use std::error::Error;

use bytes::{BufMut, BytesMut};
use postgres::types::{to_sql_checked, FromSql, IsNull, ToSql, Type};
use tracing::trace;

use crate::agtype::Agtype;
use crate::error::{AgtypeError, Result};

pub use rows::AgeRow;

/// Catalog name of the agtype base type.
pub const AGTYPE_TYPE_NAME: &str = "agtype";

/// Schema the graph extension installs its types into.
pub const AGTYPE_SCHEMA: &str = "ag_catalog";

/// Leading byte of a binary agtype buffer.
pub const AGTYPE_FORMAT_VERSION: u8 = 1;

/// Reads and writes agtype text through driver buffers.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCodec;

impl TextCodec {
    /// Wrap a text payload. The bytes must be UTF-8.
    pub fn decode(raw: &[u8]) -> Result<Agtype> {
        let text = std::str::from_utf8(raw)
            .map_err(|_| AgtypeError::format("UTF-8 agtype text", String::from_utf8_lossy(raw)))?;
        trace!(len = raw.len(), "agtype read");
        Ok(Agtype::new(text))
    }

    /// Append the raw text of `value` to `out`.
    pub fn encode(value: &Agtype, out: &mut BytesMut) -> Result<()> {
        let text = value.as_raw().ok_or(AgtypeError::null("wire text"))?;
        out.put_slice(text.as_bytes());
        trace!(len = text.len(), "agtype write");
        Ok(())
    }

    /// Strip the version byte and wrap the text behind it.
    pub fn decode_framed(raw: &[u8]) -> Result<Agtype> {
        match raw.split_first() {
            Some((&AGTYPE_FORMAT_VERSION, text)) => Self::decode(text),
            Some((version, _)) => Err(AgtypeError::format(
                "agtype format version",
                version.to_string(),
            )),
            None => Err(AgtypeError::format("agtype format version", "empty buffer")),
        }
    }

    /// Write the version byte followed by the raw text.
    pub fn encode_framed(value: &Agtype, out: &mut BytesMut) -> Result<()> {
        if value.is_null() {
            return Err(AgtypeError::null("wire text"));
        }
        out.put_u8(AGTYPE_FORMAT_VERSION);
        Self::encode(value, out)
    }
}

/// `agtype`, either unqualified or inside the extension schema.
fn is_agtype(ty: &Type) -> bool {
    ty.name() == AGTYPE_TYPE_NAME && (ty.schema() == AGTYPE_SCHEMA || ty.schema().is_empty())
}

impl<'a> FromSql<'a> for Agtype {
    fn from_sql(_ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
        Ok(TextCodec::decode_framed(raw)?)
    }

    fn from_sql_null(_ty: &Type) -> Result<Self, Box<dyn Error + Sync + Send>> {
        Ok(Agtype::null())
    }

    fn accepts(ty: &Type) -> bool {
        is_agtype(ty)
    }
}

impl ToSql for Agtype {
    fn to_sql(&self, _ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        if self.is_null() {
            return Ok(IsNull::Yes);
        }
        TextCodec::encode_framed(self, out)?;
        Ok(IsNull::No)
    }

    fn accepts(ty: &Type) -> bool {
        is_agtype(ty)
    }

    to_sql_checked!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Vertex;
    use postgres::types::Kind;
    use rstest::{fixture, rstest};

    const AGTYPE_OID: u32 = 16_385;

    #[fixture]
    fn agtype_type() -> Type {
        Type::new(
            AGTYPE_TYPE_NAME.to_string(),
            AGTYPE_OID,
            Kind::Simple,
            AGTYPE_SCHEMA.to_string(),
        )
    }

    fn framed(text: &str) -> Vec<u8> {
        let mut raw = vec![AGTYPE_FORMAT_VERSION];
        raw.extend_from_slice(text.as_bytes());
        raw
    }

    // =========================================================================
    // TextCodec
    // =========================================================================

    #[rstest]
    fn test_decode_wraps_text() {
        let value = TextCodec::decode(b"[1, 2]").unwrap();
        assert_eq!(value.as_raw(), Some("[1, 2]"));
    }

    #[rstest]
    fn test_decode_rejects_invalid_utf8() {
        let err = TextCodec::decode(&[0xff, 0xfe]).unwrap_err();
        assert!(err.is_format());
    }

    #[rstest]
    fn test_encode_appends_text() {
        let mut out = BytesMut::from(&b"x"[..]);
        TextCodec::encode(&Agtype::new("true"), &mut out).unwrap();
        assert_eq!(&out[..], b"xtrue");
    }

    #[rstest]
    fn test_encode_null_is_null_error() {
        let mut out = BytesMut::new();
        let err = TextCodec::encode(&Agtype::null(), &mut out).unwrap_err();
        assert!(err.is_null_value());
        assert!(out.is_empty());
    }

    #[rstest]
    fn test_decode_framed() {
        let value = TextCodec::decode_framed(&framed("42")).unwrap();
        assert_eq!(value.get_integer().unwrap(), 42);
    }

    #[rstest]
    #[case(&[][..])]
    #[case(&[2, b'4', b'2'][..])]
    #[case(&[0][..])]
    fn test_decode_framed_rejects_bad_version(#[case] raw: &[u8]) {
        assert!(TextCodec::decode_framed(raw).unwrap_err().is_format());
    }

    #[rstest]
    fn test_encode_framed_writes_version() {
        let mut out = BytesMut::new();
        TextCodec::encode_framed(&Agtype::new("\"hi\""), &mut out).unwrap();
        assert_eq!(&out[..], framed("\"hi\"").as_slice());
    }

    #[rstest]
    fn test_encode_framed_null_writes_nothing() {
        let mut out = BytesMut::new();
        assert!(TextCodec::encode_framed(&Agtype::null(), &mut out).unwrap_err().is_null_value());
        assert!(out.is_empty());
    }

    // =========================================================================
    // Driver traits
    // =========================================================================

    #[rstest]
    fn test_accepts_agtype_only(agtype_type: Type) {
        assert!(<Agtype as FromSql>::accepts(&agtype_type));
        assert!(<Agtype as ToSql>::accepts(&agtype_type));
        assert!(!<Agtype as FromSql>::accepts(&Type::TEXT));
        assert!(!<Agtype as ToSql>::accepts(&Type::JSONB));
    }

    #[rstest]
    fn test_accepts_unqualified_agtype() {
        let ty = Type::new(AGTYPE_TYPE_NAME.to_string(), AGTYPE_OID, Kind::Simple, String::new());
        assert!(<Agtype as FromSql>::accepts(&ty));
    }

    #[rstest]
    fn test_rejects_same_name_in_other_schema() {
        let ty = Type::new(AGTYPE_TYPE_NAME.to_string(), AGTYPE_OID, Kind::Simple, "public".to_string());
        assert!(!<Agtype as FromSql>::accepts(&ty));
    }

    #[rstest]
    fn test_array_type_accepted(agtype_type: Type) {
        let array = Type::new(
            "_agtype".to_string(),
            AGTYPE_OID + 1,
            Kind::Array(agtype_type),
            AGTYPE_SCHEMA.to_string(),
        );
        assert!(<Vec<Agtype> as FromSql>::accepts(&array));
        assert!(<Vec<Agtype> as ToSql>::accepts(&array));
    }

    #[rstest]
    fn test_from_sql_reads_vertex(agtype_type: Type) {
        let text = Vertex::new(7_u64, "City").with_property("name", "Oslo").to_string();
        let value = Agtype::from_sql(&agtype_type, &framed(&text)).unwrap();
        let vertex = value.get_vertex().unwrap();
        assert_eq!(vertex.id.value(), 7);
        assert_eq!(vertex.label, "City");
    }

    #[rstest]
    fn test_from_sql_null_is_null_backed(agtype_type: Type) {
        let value = Agtype::from_sql_null(&agtype_type).unwrap();
        assert!(value.is_null());
        assert!(value.get_long().unwrap_err().is_null_value());
    }

    #[rstest]
    fn test_to_sql_round_trip(agtype_type: Type) {
        let mut out = BytesMut::new();
        let value = Agtype::new("[1, \"two\", 3.5]");
        let is_null = value.to_sql(&agtype_type, &mut out).unwrap();
        assert!(matches!(is_null, IsNull::No));
        let back = Agtype::from_sql(&agtype_type, &out).unwrap();
        assert_eq!(back, value);
    }

    #[rstest]
    fn test_to_sql_null(agtype_type: Type) {
        let mut out = BytesMut::new();
        let is_null = Agtype::null().to_sql(&agtype_type, &mut out).unwrap();
        assert!(matches!(is_null, IsNull::Yes));
        assert!(out.is_empty());
    }

    #[rstest]
    fn test_to_sql_checked_rejects_wrong_type() {
        let mut out = BytesMut::new();
        assert!(Agtype::new("1").to_sql_checked(&Type::INT4, &mut out).is_err());
    }
}
