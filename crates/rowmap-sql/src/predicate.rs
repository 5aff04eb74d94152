use crate::Serializer;

use rowmap_core::{
    schema::ModelMetadata,
    stmt::{Condition, ConditionValue, Value},
    Result,
};

/// A compiled condition: fragments joined with `AND` in a WHERE clause.
///
/// An empty predicate means "no filter".
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Predicate {
    fragments: Vec<Fragment>,
}

/// A single comparison within a [`Predicate`].
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// `` `column`=? ``
    Eq { column: String, value: Value },

    /// `` `column` IN (?,?,...) ``, one placeholder per value. An empty list
    /// matches nothing.
    In { column: String, values: Vec<Value> },
}

/// Compiles a condition against a model.
///
/// Every value ends up as a bound parameter. Primary key conditions on a
/// keyless model fail with [`Error::no_primary_key_defined`]. Field map
/// entries naming fields the model does not declare are skipped.
///
/// [`Error::no_primary_key_defined`]: rowmap_core::Error::no_primary_key_defined
pub fn compile(condition: &Condition, model: &ModelMetadata) -> Result<Predicate> {
    let mut predicate = Predicate::new();

    match condition {
        Condition::Scalar(value) => {
            let pk = model.expect_primary_key()?;
            predicate.push(Fragment::Eq {
                column: pk.name.clone(),
                value: value.clone(),
            });
        }
        Condition::InSet(values) => {
            let pk = model.expect_primary_key()?;
            predicate.push(Fragment::In {
                column: pk.name.clone(),
                values: values.clone(),
            });
        }
        Condition::FieldMap(map) => {
            for (name, expected) in map.iter() {
                let Some(ty) = model.field_type(name) else {
                    tracing::trace!(model = model.name(), field = name, "skipping unknown field in condition");
                    continue;
                };

                predicate.push(match expected {
                    ConditionValue::Eq(value) => Fragment::Eq {
                        column: name.to_string(),
                        value: ty.coerce_condition(value.clone()),
                    },
                    ConditionValue::In(values) => Fragment::In {
                        column: name.to_string(),
                        values: values
                            .iter()
                            .map(|value| ty.coerce_condition(value.clone()))
                            .collect(),
                    },
                });
            }
        }
    }

    Ok(predicate)
}

impl Predicate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// All bound values, in placeholder order.
    pub fn params(&self) -> Vec<Value> {
        self.fragments
            .iter()
            .flat_map(|fragment| fragment.params())
            .cloned()
            .collect()
    }
}

impl Fragment {
    pub fn column(&self) -> &str {
        match self {
            Fragment::Eq { column, .. } | Fragment::In { column, .. } => column,
        }
    }

    /// The fragment's SQL text.
    pub fn sql(&self) -> String {
        let mut params = Vec::<Value>::new();
        Serializer::new().serialize_fragment(self, &mut params)
    }

    /// Values bound by the fragment, in placeholder order.
    pub fn params(&self) -> &[Value] {
        match self {
            Fragment::Eq { value, .. } => std::slice::from_ref(value),
            Fragment::In { values, .. } => values,
        }
    }
}
