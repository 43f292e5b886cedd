//! Postgres column support: identifiers are stored as `TEXT` in canonical form.

use ::sqlx::encode::IsNull;
use ::sqlx::error::BoxDynError;
use ::sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueRef};
use ::sqlx::{Decode, Encode, Postgres, Type};

use crate::{IdKind, TypeId, TypedId};

impl Type<Postgres> for TypeId {
    fn type_info() -> PgTypeInfo {
        <String as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <String as Type<Postgres>>::compatible(ty)
    }
}

impl<'q> Encode<'q, Postgres> for TypeId {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        <String as Encode<'q, Postgres>>::encode_by_ref(&self.to_string(), buf)
    }
}

impl<'r> Decode<'r, Postgres> for TypeId {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let text = <&str as Decode<'r, Postgres>>::decode(value)?;
        Ok(TypeId::parse(text)?)
    }
}

impl<K: IdKind> Type<Postgres> for TypedId<K> {
    fn type_info() -> PgTypeInfo {
        <String as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <String as Type<Postgres>>::compatible(ty)
    }
}

impl<'q, K: IdKind> Encode<'q, Postgres> for TypedId<K> {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        <String as Encode<'q, Postgres>>::encode_by_ref(&self.to_string(), buf)
    }
}

impl<'r, K: IdKind> Decode<'r, Postgres> for TypedId<K> {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let text = <&str as Decode<'r, Postgres>>::decode(value)?;
        Ok(TypedId::parse(text)?)
    }
}
