//! Model class generation

use super::types::TypeMapper;
use super::writer::JavaWriter;
use crate::class_map::ClassMap;
use crate::ir::{Property, Schema};

/// Emits one plain data class per schema
pub struct ModelEmitter<'a> {
    pub package: &'a str,
    pub mapper: &'a TypeMapper,
    pub class_map: Option<&'a ClassMap>,
    pub generate_docs: bool,
}

impl ModelEmitter<'_> {
    /// Generate the source of a schema's model class
    pub fn emit(&self, schema: &Schema) -> String {
        let mut writer = JavaWriter::new();

        writer
            .emit_package(self.package)
            .emit_imports(["java.util.List"])
            .emit_empty_line();

        if self.generate_docs {
            if let Some(description) = &schema.description {
                writer.emit_javadoc(description);
            }
        }

        writer.begin_type("class", &schema.id);

        for property in &schema.properties {
            if self.generate_docs {
                if let Some(description) = &property.description {
                    writer.emit_javadoc(description);
                }
            }
            writer.emit_field(&self.field_type(property), &property.name);
        }

        writer.end_type();
        writer.finish()
    }

    /// Class map override if present, otherwise the mapped type
    fn field_type(&self, property: &Property) -> String {
        self.class_map
            .and_then(|map| map.get(&property.name))
            .map(String::from)
            .unwrap_or_else(|| self.mapper.map(&property.type_ref))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Primitive, TypeRef};

    fn schema() -> Schema {
        Schema {
            id: "Item".into(),
            description: Some("A stored item.".into()),
            properties: vec![
                Property {
                    name: "id".into(),
                    description: Some("Unique identifier.".into()),
                    type_ref: TypeRef::Primitive(Primitive::String),
                },
                Property {
                    name: "count".into(),
                    description: None,
                    type_ref: TypeRef::Primitive(Primitive::Integer),
                },
                Property {
                    name: "owners".into(),
                    description: None,
                    type_ref: TypeRef::array_of(TypeRef::reference("User")),
                },
            ],
        }
    }

    fn emitter<'a>(mapper: &'a TypeMapper, class_map: Option<&'a ClassMap>) -> ModelEmitter<'a> {
        ModelEmitter {
            package: "com.example.api.model",
            mapper,
            class_map,
            generate_docs: false,
        }
    }

    #[test]
    fn test_emit_model() {
        let mapper = TypeMapper::unqualified();
        let code = emitter(&mapper, None).emit(&schema());

        assert_eq!(
            code,
            "package com.example.api.model;\n\
             \n\
             import java.util.List;\n\
             \n\
             public class Item {\n\
             \x20 public String id;\n\
             \x20 public int count;\n\
             \x20 public List<User> owners;\n\
             }\n"
        );
    }

    #[test]
    fn test_class_map_overrides_field_type() {
        let mapper = TypeMapper::unqualified();
        let class_map = ClassMap::parse("id\tLong");
        let code = emitter(&mapper, Some(&class_map)).emit(&schema());

        assert!(code.contains("  public Long id;\n"));
        assert!(!code.contains("public String id;"));
        assert!(code.contains("  public int count;\n"));
    }

    #[test]
    fn test_field_names_are_not_transformed() {
        let mapper = TypeMapper::unqualified();
        let schema = Schema {
            id: "Odd".into(),
            description: None,
            properties: vec![Property {
                name: "snake_case_Name".into(),
                description: None,
                type_ref: TypeRef::Primitive(Primitive::Boolean),
            }],
        };
        let code = emitter(&mapper, None).emit(&schema);
        assert!(code.contains("  public boolean snake_case_Name;\n"));
    }

    #[test]
    fn test_empty_schema_emits_empty_class() {
        let mapper = TypeMapper::unqualified();
        let schema = Schema {
            id: "Empty".into(),
            description: None,
            properties: Vec::new(),
        };
        let code = emitter(&mapper, None).emit(&schema);
        assert!(code.ends_with("public class Empty {\n}\n"));
    }

    #[test]
    fn test_docs_from_descriptions() {
        let mapper = TypeMapper::unqualified();
        let mut emitter = emitter(&mapper, None);
        emitter.generate_docs = true;
        let code = emitter.emit(&schema());

        assert!(code.contains("/**\n * A stored item.\n */\npublic class Item {\n"));
        assert!(code.contains("  /**\n   * Unique identifier.\n   */\n  public String id;\n"));
    }
}
