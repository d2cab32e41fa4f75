//! Space descriptors - the schema a record collection declares to the
//! hosted store. Sent along with every request in the `structure` header.

use serde::Serialize;

/// Wire type of a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldType {
    #[serde(rename = "String")]
    Text,
    #[serde(rename = "Array")]
    List,
}

/// One declared field of a space.
#[derive(Debug, Clone, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
}

/// A named record collection of a fixed shape.
#[derive(Debug, Clone, Serialize)]
pub struct Space {
    pub space: &'static str,
    pub description: &'static str,
    pub structure: Vec<FieldSpec>,
}

/// The blog space, mirrored field-for-field from the hosted project.
pub fn blog_space() -> Space {
    Space {
        space: "Blog",
        description: "A Record Space for Blogs",
        structure: vec![
            FieldSpec {
                name: "title",
                description: "The title of the blog post",
                field_type: FieldType::Text,
                required: true,
            },
            FieldSpec {
                name: "content",
                description: "The main content of the blog post",
                field_type: FieldType::Text,
                required: true,
            },
            FieldSpec {
                name: "author",
                description: "The author of the blog post",
                field_type: FieldType::Text,
                required: true,
            },
            FieldSpec {
                name: "createdAt",
                description: "The creation timestamp of the blog post",
                field_type: FieldType::Text,
                required: true,
            },
            FieldSpec {
                name: "updatedAt",
                description: "The last updated timestamp of the blog post",
                field_type: FieldType::Text,
                required: true,
            },
            FieldSpec {
                name: "tags",
                description: "Tags associated with the blog post",
                field_type: FieldType::List,
                required: false,
            },
            FieldSpec {
                name: "coverImage",
                description: "URL for the cover image of the blog post",
                field_type: FieldType::Text,
                required: false,
            },
        ],
    }
}
