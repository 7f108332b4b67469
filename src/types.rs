//! Request and response bodies for both services

use std::fmt;

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /predict`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InferenceRequest {
    /// Input features. Shorter inputs are zero padded, longer ones truncated.
    #[validate(length(min = 1, message = "data must contain at least 1 item"))]
    #[serde(deserialize_with = "deserialize_lax_floats")]
    pub data: Vec<f32>,
}

/// Accept numbers, numeric strings (`"1.5"`, `"inf"`, `"nan"`) and booleans
/// as floats. Anything else is a type error.
fn deserialize_lax_floats<'de, D>(deserializer: D) -> Result<Vec<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    struct LaxFloat(f32);

    impl<'de> Deserialize<'de> for LaxFloat {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(LaxFloatVisitor).map(LaxFloat)
        }
    }

    struct LaxFloatVisitor;

    impl<'de> Visitor<'de> for LaxFloatVisitor {
        type Value = f32;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a number, a numeric string or a boolean")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<f32, E> {
            Ok(v as f32)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<f32, E> {
            Ok(v as f32)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<f32, E> {
            Ok(v as f32)
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<f32, E> {
            Ok(if v { 1.0 } else { 0.0 })
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<f32, E> {
            v.trim()
                .parse::<f32>()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
        }
    }

    struct LaxFloatsVisitor;

    impl<'de> Visitor<'de> for LaxFloatsVisitor {
        type Value = Vec<f32>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a list of numbers")
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Vec<f32>, A::Error> {
            let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(LaxFloat(value)) = seq.next_element()? {
                values.push(value);
            }
            Ok(values)
        }
    }

    deserializer.deserialize_seq(LaxFloatsVisitor)
}

/// Result of `POST /predict`. Failures keep HTTP 200 and are reported through
/// `status` with an empty `prediction`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InferenceResponse {
    pub prediction: Vec<f32>,
    pub status: String,
}

impl InferenceResponse {
    pub fn success(prediction: Vec<f32>) -> Self {
        Self {
            prediction,
            status: "success".to_string(),
        }
    }

    pub fn error(message: impl std::fmt::Display) -> Self {
        Self {
            prediction: Vec::new(),
            status: format!("error: {}", message),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WelcomeResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

/// Health payload of the inference backend, describing the numeric runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InferenceHealthResponse {
    pub status: String,
    pub torch_version: String,
    pub cuda_available: bool,
}
