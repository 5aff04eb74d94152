use rowmap_core::{
    driver::FieldInitError,
    schema::{DefaultValue, Field, FieldType},
};

/// SQLite column affinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Affinity {
    Integer,
    Real,
    Numeric,
    Text,
    Blob,
}

/// Storage type used when a field does not override it.
pub(crate) fn default_storage_ty(ty: FieldType) -> &'static str {
    match ty {
        FieldType::String => "TEXT",
        FieldType::Integer => "INTEGER",
        FieldType::Float => "REAL",
        FieldType::Boolean => "INTEGER",
        // Milliseconds since the Unix epoch
        FieldType::Timestamp => "INTEGER",
        FieldType::Json => "TEXT",
    }
}

/// Resolves the affinity of a declared storage type, or `None` for a type
/// name SQLite would not recognize.
pub(crate) fn affinity(db_type: &str) -> Option<Affinity> {
    let base = match db_type.find('(') {
        Some(index) => &db_type[..index],
        None => db_type,
    };

    match base.trim().to_ascii_uppercase().as_str() {
        "INTEGER" | "INT" | "BIGINT" | "SMALLINT" | "TINYINT" => Some(Affinity::Integer),
        "REAL" | "DOUBLE" | "FLOAT" => Some(Affinity::Real),
        "NUMERIC" | "DECIMAL" | "BOOLEAN" | "DATETIME" | "DATE" => Some(Affinity::Numeric),
        "TEXT" | "VARCHAR" | "CHAR" | "CLOB" => Some(Affinity::Text),
        "BLOB" => Some(Affinity::Blob),
        _ => None,
    }
}

pub(crate) fn init_field(field: &mut Field) -> Result<(), FieldInitError> {
    let storage_ty = match &field.db_type {
        Some(db_type) => db_type.trim().to_string(),
        None => default_storage_ty(field.ty).to_string(),
    };

    let Some(affinity) = affinity(&storage_ty) else {
        return Err(FieldInitError::UnknownFieldType(storage_ty));
    };

    // Blobs are written and read back as raw bytes, which a concrete default
    // cannot round-trip through.
    if affinity == Affinity::Blob
        && matches!(&field.default_value, Some(DefaultValue::Value(value)) if !value.is_null())
    {
        return Err(FieldInitError::UnsupportedDefaultValue);
    }

    // Auto-update timestamps are stored as epoch milliseconds.
    if field.auto_update && !matches!(affinity, Affinity::Integer | Affinity::Numeric) {
        return Err(FieldInitError::InvalidAutoUpdateField);
    }

    if field.auto_increment && affinity != Affinity::Integer {
        return Err(FieldInitError::UnknownFieldType(storage_ty));
    }

    field.storage_ty = storage_ty;
    Ok(())
}
