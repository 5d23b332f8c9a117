use serde::Serialize;
use serde_json::{Value, json};

/// Static description of a callable surfaced to a model: a name, a prose
/// description, and a JSON schema for its parameters. The schema is carried
/// opaquely; nothing in this crate invokes the callable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionDeclaration {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

/// The `get_user_info` descriptor, preserved exactly as the evaluation
/// harness expects it, including the `dict` schema type spelling.
pub fn get_user_info_declaration() -> FunctionDeclaration {
    FunctionDeclaration {
        name: "get_user_info".to_string(),
        description: "Retrieve details for a specific user by their unique identifier. \
                      Note that the provided function is in Python 3 syntax."
            .to_string(),
        parameters: json!({
            "type": "dict",
            "required": ["user_id"],
            "properties": {
                "user_id": {
                    "type": "integer",
                    "description": "The unique identifier of the user. It is used to fetch the specific user details from the database."
                },
                "special": {
                    "type": "string",
                    "description": "Any special information or parameters that need to be considered while fetching user details.",
                    "default": "none"
                }
            }
        }),
    }
}
