use axum_helpers::WireFields;
use serde::{Deserialize, Deserializer, Serialize, de};
use validator::Validate;

/// User identifier, assigned by the store on creation
pub type UserId = i64;

/// User entity
///
/// Wire shape: `{"id_usuario": 1, "nombre": "Jorge", "isAdmin": true}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, immutable after creation
    #[serde(rename = "id_usuario")]
    pub id: UserId,
    /// Display name
    #[serde(rename = "nombre")]
    pub name: String,
    /// Administrator flag; omitted from JSON when unset
    #[serde(rename = "isAdmin", default, skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>, is_admin: Option<bool>) -> Self {
        Self {
            id,
            name: name.into(),
            is_admin,
        }
    }

    /// Apply a patch. Only the name is mutable.
    pub fn apply_update(&mut self, update: UpdateUser) {
        self.name = update.name;
    }
}

/// Body of `POST /usuarios`: a user without its id
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUser {
    #[serde(rename = "nombre")]
    #[validate(length(min = 2))]
    pub name: String,
    #[serde(rename = "isAdmin", default)]
    pub is_admin: Option<bool>,
}

/// Body of `PUT /usuarios/{id_usuario}`: the full user shape
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReplaceUser {
    #[serde(rename = "id_usuario", deserialize_with = "integral_id")]
    pub id: UserId,
    #[serde(rename = "nombre")]
    #[validate(length(min = 2))]
    pub name: String,
    #[serde(rename = "isAdmin", default)]
    pub is_admin: Option<bool>,
}

/// Accepts integral JSON numbers, including a float form such as `2.0`.
fn integral_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<UserId, D::Error> {
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(id) = number.as_i64() {
        return Ok(id);
    }

    match number.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
            Ok(f as UserId)
        }
        _ => Err(de::Error::custom(format!(
            "invalid id {number}, expected an integer"
        ))),
    }
}

/// Repository patch applied by `update`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUser {
    pub name: String,
}

impl From<ReplaceUser> for UpdateUser {
    fn from(input: ReplaceUser) -> Self {
        Self { name: input.name }
    }
}

/// Query filters for listing users
///
/// `GET /usuarios?nombre=ju`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UserFilter {
    /// Case-insensitive substring of the name
    #[serde(rename = "nombre")]
    #[validate(length(min = 2))]
    pub name: Option<String>,
}

/// Body of `POST /login`
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default, alias = "usuario", alias = "username")]
    pub user: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Rust field name to wire name for the user schemas.
fn user_wire_field(field: &str) -> &str {
    match field {
        "id" => "id_usuario",
        "name" => "nombre",
        "is_admin" => "isAdmin",
        other => other,
    }
}

impl WireFields for CreateUser {
    fn wire_field(field: &str) -> &str {
        user_wire_field(field)
    }
}

impl WireFields for ReplaceUser {
    fn wire_field(field: &str) -> &str {
        user_wire_field(field)
    }
}

impl WireFields for UserFilter {
    fn wire_field(field: &str) -> &str {
        user_wire_field(field)
    }
}

impl WireFields for LoginRequest {}

/// Response of a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}
