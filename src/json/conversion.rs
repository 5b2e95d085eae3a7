use bumpalo::collections::Vec;
use serde::de::{value::Error as DeError, value::StrDeserializer, DeserializeOwned, IntoDeserializer};
use serde_json::{Map as JSMap, Value as JSValue};

use crate::ast::*;
use crate::error::{Error, Result};

type JSObject = JSMap<String, JSValue>;

/// Trait for reading AST Nodes from the conventional JSON representation of a GraphQL AST, where
/// every node is an object tagged by its `"kind"`.
///
/// Strings are copied into the [ASTContext]'s arena, so the resulting node doesn't borrow from the
/// input JSON.
///
/// A `"description"` is only read where [`ASTKind::takes_description`] allows one. On any other
/// node it fails with [`ErrorType::InvalidNode`](crate::error::ErrorType::InvalidNode).
pub trait NodeFromJson<'a>: Sized {
    /// Read an AST Node from a [serde_json::Value].
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self>;
}

/// A JSON `null` reads as `None`.
impl<'a, T: NodeFromJson<'a>> NodeFromJson<'a> for Option<T> {
    #[inline]
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        match json {
            JSValue::Null => Ok(None),
            json => T::from_json(ctx, json).map(Some),
        }
    }
}

/// Read a node tree from JSON and print it to source text.
///
/// A JSON `null` prints as the empty string. Any node that can't be read aborts printing of the
/// whole tree, so no partial output is returned.
pub fn print_json(json: &JSValue) -> Result<String> {
    let ctx = ASTContext::new();
    let printed = match Option::<Node>::from_json(&ctx, json) {
        Ok(node) => {
            if let Some(node) = &node {
                tracing::debug!(kind = %node.kind(), "printing node tree");
            }
            Ok(node.print())
        }
        Err(error) => {
            tracing::debug!(%error, "rejected node tree");
            Err(error)
        }
    };
    printed
}

fn snippet(json: &JSValue) -> String {
    json.to_string().chars().take(80).collect()
}

fn missing(node: &JSObject, key: &str) -> Error {
    let kind = node.get("kind").and_then(JSValue::as_str).unwrap_or("Node");
    Error::new(format!("{kind} is missing its required '{key}' field"), None)
}

/// Returns a field's value, treating `null` like a missing field.
#[inline]
fn field_of<'j>(node: &'j JSObject, key: &str) -> Option<&'j JSValue> {
    node.get(key).filter(|value| !value.is_null())
}

pub(crate) fn object_of(json: &JSValue) -> Result<&JSObject> {
    json.as_object().ok_or_else(|| {
        Error::new_with_context("Expected a node object".to_string(), snippet(json), None)
    })
}

/// Reads a node's `kind` tag, failing with an unknown kind error if no printer exists for it.
///
/// A description on a kind that can't print one is rejected instead of being dropped.
pub(crate) fn kind_of(node: &JSObject) -> Result<ASTKind> {
    let kind = match node.get("kind") {
        Some(JSValue::String(kind)) => kind.parse::<ASTKind>().map_err(|error| {
            tracing::trace!(kind = kind.as_str(), "no printer for node kind");
            error
        })?,
        _ => return Err(Error::new("Node is missing its 'kind' tag", None)),
    };
    match field_of(node, "description") {
        Some(description) if !kind.takes_description() => Err(Error::new_with_context(
            format!("{kind} can't carry a description"),
            snippet(description),
            None,
        )),
        _ => Ok(kind),
    }
}

/// Reads a node object and checks that it's of the `expected` kind.
pub(crate) fn node_of(json: &JSValue, expected: ASTKind) -> Result<&JSObject> {
    let node = object_of(json)?;
    let kind = kind_of(node)?;
    if kind == expected {
        Ok(node)
    } else {
        Err(Error::new_with_context(
            format!("Expected {expected} node but received {kind}"),
            snippet(json),
            None,
        ))
    }
}

pub(crate) fn required<'a, T: NodeFromJson<'a>>(
    ctx: &'a ASTContext,
    node: &JSObject,
    key: &str,
) -> Result<T> {
    match field_of(node, key) {
        Some(value) => T::from_json(ctx, value),
        None => Err(missing(node, key)),
    }
}

pub(crate) fn optional<'a, T: NodeFromJson<'a>>(
    ctx: &'a ASTContext,
    node: &JSObject,
    key: &str,
) -> Result<Option<T>> {
    field_of(node, key)
        .map(|value| T::from_json(ctx, value))
        .transpose()
}

/// Reads a list of nodes. A missing list reads as an empty list.
pub(crate) fn list_of<'a, T: NodeFromJson<'a>>(
    ctx: &'a ASTContext,
    node: &JSObject,
    key: &str,
) -> Result<Vec<'a, T>> {
    let mut children = Vec::new_in(&ctx.arena);
    match field_of(node, key) {
        None => {}
        Some(JSValue::Array(items)) => {
            children.reserve(items.len());
            for item in items {
                children.push(T::from_json(ctx, item)?);
            }
        }
        Some(other) => {
            return Err(Error::new_with_context(
                format!("Expected '{key}' to be a list"),
                snippet(other),
                None,
            ))
        }
    }
    Ok(children)
}

/// Reads a raw scalar, which may be given as a string or a number.
pub(crate) fn scalar_of<'a>(ctx: &'a ASTContext, node: &JSObject, key: &str) -> Result<&'a str> {
    match field_of(node, key) {
        Some(JSValue::String(value)) => Ok(ctx.alloc_str(value)),
        Some(JSValue::Number(value)) => Ok(ctx.alloc_string(value.to_string())),
        Some(other) => Err(Error::new_with_context(
            format!("Expected '{key}' to be a string"),
            snippet(other),
            None,
        )),
        None => Err(missing(node, key)),
    }
}

/// Reads a name, given either as a `Name` node or as a plain string.
fn name_from_json<'a>(ctx: &'a ASTContext, json: &JSValue) -> Result<&'a str> {
    match json {
        JSValue::String(name) => Ok(ctx.alloc_str(name)),
        json => scalar_of(ctx, node_of(json, ASTKind::Name)?, "value"),
    }
}

pub(crate) fn name_of<'a>(ctx: &'a ASTContext, node: &JSObject, key: &str) -> Result<&'a str> {
    match field_of(node, key) {
        Some(value) => name_from_json(ctx, value),
        None => Err(missing(node, key)),
    }
}

fn optional_name_of<'a>(
    ctx: &'a ASTContext,
    node: &JSObject,
    key: &str,
) -> Result<Option<&'a str>> {
    field_of(node, key)
        .map(|value| name_from_json(ctx, value))
        .transpose()
}

/// Decodes a keyword like `query` or `FIELD_DEFINITION` into its enum.
fn keyword_of<T: DeserializeOwned>(value: &str) -> Result<T> {
    let deserializer: StrDeserializer<'_, DeError> = value.into_deserializer();
    T::deserialize(deserializer)
        .map_err(|_| Error::new(format!("'{value}' is not a valid keyword here"), None))
}

fn flag_of(node: &JSObject, key: &str) -> bool {
    node.get(key).and_then(JSValue::as_bool).unwrap_or(false)
}

fn directives_of<'a>(ctx: &'a ASTContext, node: &JSObject) -> Result<Directives<'a>> {
    Ok(Directives {
        children: list_of(ctx, node, "directives")?,
    })
}

fn selection_set_of<'a>(ctx: &'a ASTContext, node: &JSObject) -> Result<SelectionSet<'a>> {
    Ok(optional(ctx, node, "selectionSet")?
        .unwrap_or_else(|| SelectionSet::default_in(&ctx.arena)))
}

impl<'a> NodeFromJson<'a> for OperationKind {
    fn from_json(_ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        match json {
            JSValue::String(operation) => keyword_of(operation),
            json => Err(Error::new_with_context(
                "Expected an operation keyword".to_string(),
                snippet(json),
                None,
            )),
        }
    }
}

impl<'a> NodeFromJson<'a> for DirectiveLocation {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        keyword_of(name_from_json(ctx, json)?)
    }
}

impl<'a> NodeFromJson<'a> for Document<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let node = node_of(json, ASTKind::Document)?;
        Ok(Document {
            definitions: list_of(ctx, node, "definitions")?,
        })
    }
}

impl<'a> NodeFromJson<'a> for OperationDefinition<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let node = node_of(json, ASTKind::OperationDefinition)?;
        Ok(OperationDefinition {
            operation: required(ctx, node, "operation")?,
            name: optional_name_of(ctx, node, "name")?.map(NamedType::from),
            variable_definitions: VariableDefinitions {
                children: list_of(ctx, node, "variableDefinitions")?,
            },
            directives: directives_of(ctx, node)?,
            selection_set: selection_set_of(ctx, node)?,
        })
    }
}

impl<'a> NodeFromJson<'a> for VariableDefinition<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let node = node_of(json, ASTKind::VariableDefinition)?;
        Ok(VariableDefinition {
            variable: required(ctx, node, "variable")?,
            of_type: required(ctx, node, "type")?,
            default_value: optional(ctx, node, "defaultValue")?,
            directives: directives_of(ctx, node)?,
        })
    }
}

impl<'a> NodeFromJson<'a> for SelectionSet<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let node = node_of(json, ASTKind::SelectionSet)?;
        Ok(SelectionSet {
            selections: list_of(ctx, node, "selections")?,
        })
    }
}

impl<'a> NodeFromJson<'a> for Selection<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        match kind_of(object_of(json)?)? {
            ASTKind::Field => Field::from_json(ctx, json).map(Selection::Field),
            ASTKind::FragmentSpread => {
                FragmentSpread::from_json(ctx, json).map(Selection::FragmentSpread)
            }
            ASTKind::InlineFragment => {
                InlineFragment::from_json(ctx, json).map(Selection::InlineFragment)
            }
            kind => Err(Error::new(
                format!("Expected a selection but received {kind}"),
                None,
            )),
        }
    }
}

impl<'a> NodeFromJson<'a> for Field<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let node = node_of(json, ASTKind::Field)?;
        Ok(Field {
            alias: optional_name_of(ctx, node, "alias")?,
            name: name_of(ctx, node, "name")?,
            arguments: Arguments {
                children: list_of(ctx, node, "arguments")?,
            },
            directives: directives_of(ctx, node)?,
            selection_set: selection_set_of(ctx, node)?,
        })
    }
}

impl<'a> NodeFromJson<'a> for Argument<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let node = node_of(json, ASTKind::Argument)?;
        Ok(Argument {
            name: name_of(ctx, node, "name")?,
            value: required(ctx, node, "value")?,
        })
    }
}

impl<'a> NodeFromJson<'a> for Directive<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let node = node_of(json, ASTKind::Directive)?;
        Ok(Directive {
            name: name_of(ctx, node, "name")?,
            arguments: Arguments {
                children: list_of(ctx, node, "arguments")?,
            },
        })
    }
}

impl<'a> NodeFromJson<'a> for FragmentSpread<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let node = node_of(json, ASTKind::FragmentSpread)?;
        Ok(FragmentSpread {
            name: name_of(ctx, node, "name")?.into(),
            directives: directives_of(ctx, node)?,
        })
    }
}

impl<'a> NodeFromJson<'a> for InlineFragment<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let node = node_of(json, ASTKind::InlineFragment)?;
        Ok(InlineFragment {
            type_condition: optional(ctx, node, "typeCondition")?,
            directives: directives_of(ctx, node)?,
            selection_set: selection_set_of(ctx, node)?,
        })
    }
}

impl<'a> NodeFromJson<'a> for FragmentDefinition<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let node = node_of(json, ASTKind::FragmentDefinition)?;
        Ok(FragmentDefinition {
            name: name_of(ctx, node, "name")?.into(),
            type_condition: required(ctx, node, "typeCondition")?,
            directives: directives_of(ctx, node)?,
            selection_set: selection_set_of(ctx, node)?,
        })
    }
}

impl<'a> NodeFromJson<'a> for SchemaDefinition<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let node = node_of(json, ASTKind::SchemaDefinition)?;
        Ok(SchemaDefinition {
            description: optional(ctx, node, "description")?,
            directives: directives_of(ctx, node)?,
            operation_types: list_of(ctx, node, "operationTypes")?,
        })
    }
}

impl<'a> NodeFromJson<'a> for OperationTypeDefinition<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let node = node_of(json, ASTKind::OperationTypeDefinition)?;
        Ok(OperationTypeDefinition {
            operation: required(ctx, node, "operation")?,
            of_type: required(ctx, node, "type")?,
        })
    }
}

impl<'a> NodeFromJson<'a> for ScalarTypeDefinition<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let node = node_of(json, ASTKind::ScalarTypeDefinition)?;
        Ok(ScalarTypeDefinition {
            description: optional(ctx, node, "description")?,
            name: name_of(ctx, node, "name")?,
            directives: directives_of(ctx, node)?,
        })
    }
}

impl<'a> NodeFromJson<'a> for ObjectTypeDefinition<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let node = node_of(json, ASTKind::ObjectTypeDefinition)?;
        Ok(ObjectTypeDefinition {
            description: optional(ctx, node, "description")?,
            name: name_of(ctx, node, "name")?,
            interfaces: list_of(ctx, node, "interfaces")?,
            directives: directives_of(ctx, node)?,
            fields: list_of(ctx, node, "fields")?,
        })
    }
}

impl<'a> NodeFromJson<'a> for FieldDefinition<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let node = node_of(json, ASTKind::FieldDefinition)?;
        Ok(FieldDefinition {
            description: optional(ctx, node, "description")?,
            name: name_of(ctx, node, "name")?,
            arguments: list_of(ctx, node, "arguments")?,
            of_type: required(ctx, node, "type")?,
            directives: directives_of(ctx, node)?,
        })
    }
}

impl<'a> NodeFromJson<'a> for InputValueDefinition<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let node = node_of(json, ASTKind::InputValueDefinition)?;
        Ok(InputValueDefinition {
            description: optional(ctx, node, "description")?,
            name: name_of(ctx, node, "name")?,
            of_type: required(ctx, node, "type")?,
            default_value: optional(ctx, node, "defaultValue")?,
            directives: directives_of(ctx, node)?,
        })
    }
}

impl<'a> NodeFromJson<'a> for InterfaceTypeDefinition<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let node = node_of(json, ASTKind::InterfaceTypeDefinition)?;
        Ok(InterfaceTypeDefinition {
            description: optional(ctx, node, "description")?,
            name: name_of(ctx, node, "name")?,
            interfaces: list_of(ctx, node, "interfaces")?,
            directives: directives_of(ctx, node)?,
            fields: list_of(ctx, node, "fields")?,
        })
    }
}

impl<'a> NodeFromJson<'a> for UnionTypeDefinition<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let node = node_of(json, ASTKind::UnionTypeDefinition)?;
        Ok(UnionTypeDefinition {
            description: optional(ctx, node, "description")?,
            name: name_of(ctx, node, "name")?,
            directives: directives_of(ctx, node)?,
            types: list_of(ctx, node, "types")?,
        })
    }
}

impl<'a> NodeFromJson<'a> for EnumTypeDefinition<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let node = node_of(json, ASTKind::EnumTypeDefinition)?;
        Ok(EnumTypeDefinition {
            description: optional(ctx, node, "description")?,
            name: name_of(ctx, node, "name")?,
            directives: directives_of(ctx, node)?,
            values: list_of(ctx, node, "values")?,
        })
    }
}

impl<'a> NodeFromJson<'a> for EnumValueDefinition<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let node = node_of(json, ASTKind::EnumValueDefinition)?;
        Ok(EnumValueDefinition {
            description: optional(ctx, node, "description")?,
            name: name_of(ctx, node, "name")?,
            directives: directives_of(ctx, node)?,
        })
    }
}

impl<'a> NodeFromJson<'a> for InputObjectTypeDefinition<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let node = node_of(json, ASTKind::InputObjectTypeDefinition)?;
        Ok(InputObjectTypeDefinition {
            description: optional(ctx, node, "description")?,
            name: name_of(ctx, node, "name")?,
            directives: directives_of(ctx, node)?,
            fields: list_of(ctx, node, "fields")?,
        })
    }
}

impl<'a> NodeFromJson<'a> for DirectiveDefinition<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let node = node_of(json, ASTKind::DirectiveDefinition)?;
        Ok(DirectiveDefinition {
            description: optional(ctx, node, "description")?,
            name: name_of(ctx, node, "name")?,
            arguments: list_of(ctx, node, "arguments")?,
            repeatable: flag_of(node, "repeatable"),
            locations: list_of(ctx, node, "locations")?,
        })
    }
}

impl<'a> NodeFromJson<'a> for SchemaExtension<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let node = node_of(json, ASTKind::SchemaExtension)?;
        Ok(SchemaExtension {
            directives: directives_of(ctx, node)?,
            operation_types: list_of(ctx, node, "operationTypes")?,
        })
    }
}

impl<'a> NodeFromJson<'a> for ScalarTypeExtension<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let node = node_of(json, ASTKind::ScalarTypeExtension)?;
        Ok(ScalarTypeExtension {
            name: name_of(ctx, node, "name")?,
            directives: directives_of(ctx, node)?,
        })
    }
}

impl<'a> NodeFromJson<'a> for ObjectTypeExtension<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let node = node_of(json, ASTKind::ObjectTypeExtension)?;
        Ok(ObjectTypeExtension {
            name: name_of(ctx, node, "name")?,
            interfaces: list_of(ctx, node, "interfaces")?,
            directives: directives_of(ctx, node)?,
            fields: list_of(ctx, node, "fields")?,
        })
    }
}

impl<'a> NodeFromJson<'a> for InterfaceTypeExtension<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let node = node_of(json, ASTKind::InterfaceTypeExtension)?;
        Ok(InterfaceTypeExtension {
            name: name_of(ctx, node, "name")?,
            interfaces: list_of(ctx, node, "interfaces")?,
            directives: directives_of(ctx, node)?,
            fields: list_of(ctx, node, "fields")?,
        })
    }
}

impl<'a> NodeFromJson<'a> for UnionTypeExtension<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let node = node_of(json, ASTKind::UnionTypeExtension)?;
        Ok(UnionTypeExtension {
            name: name_of(ctx, node, "name")?,
            directives: directives_of(ctx, node)?,
            types: list_of(ctx, node, "types")?,
        })
    }
}

impl<'a> NodeFromJson<'a> for EnumTypeExtension<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let node = node_of(json, ASTKind::EnumTypeExtension)?;
        Ok(EnumTypeExtension {
            name: name_of(ctx, node, "name")?,
            directives: directives_of(ctx, node)?,
            values: list_of(ctx, node, "values")?,
        })
    }
}

impl<'a> NodeFromJson<'a> for InputObjectTypeExtension<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let node = node_of(json, ASTKind::InputObjectTypeExtension)?;
        Ok(InputObjectTypeExtension {
            name: name_of(ctx, node, "name")?,
            directives: directives_of(ctx, node)?,
            fields: list_of(ctx, node, "fields")?,
        })
    }
}

impl<'a> NodeFromJson<'a> for Definition<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let definition: Definition = match kind_of(object_of(json)?)? {
            ASTKind::OperationDefinition => OperationDefinition::from_json(ctx, json)?.into(),
            ASTKind::FragmentDefinition => FragmentDefinition::from_json(ctx, json)?.into(),
            ASTKind::SchemaDefinition => SchemaDefinition::from_json(ctx, json)?.into(),
            ASTKind::ScalarTypeDefinition => ScalarTypeDefinition::from_json(ctx, json)?.into(),
            ASTKind::ObjectTypeDefinition => ObjectTypeDefinition::from_json(ctx, json)?.into(),
            ASTKind::InterfaceTypeDefinition => {
                InterfaceTypeDefinition::from_json(ctx, json)?.into()
            }
            ASTKind::UnionTypeDefinition => UnionTypeDefinition::from_json(ctx, json)?.into(),
            ASTKind::EnumTypeDefinition => EnumTypeDefinition::from_json(ctx, json)?.into(),
            ASTKind::InputObjectTypeDefinition => {
                InputObjectTypeDefinition::from_json(ctx, json)?.into()
            }
            ASTKind::DirectiveDefinition => DirectiveDefinition::from_json(ctx, json)?.into(),
            ASTKind::SchemaExtension => SchemaExtension::from_json(ctx, json)?.into(),
            ASTKind::ScalarTypeExtension => ScalarTypeExtension::from_json(ctx, json)?.into(),
            ASTKind::ObjectTypeExtension => ObjectTypeExtension::from_json(ctx, json)?.into(),
            ASTKind::InterfaceTypeExtension => {
                InterfaceTypeExtension::from_json(ctx, json)?.into()
            }
            ASTKind::UnionTypeExtension => UnionTypeExtension::from_json(ctx, json)?.into(),
            ASTKind::EnumTypeExtension => EnumTypeExtension::from_json(ctx, json)?.into(),
            ASTKind::InputObjectTypeExtension => {
                InputObjectTypeExtension::from_json(ctx, json)?.into()
            }
            kind => {
                return Err(Error::new(
                    format!("Expected a definition but received {kind}"),
                    None,
                ))
            }
        };
        Ok(definition)
    }
}

impl<'a> NodeFromJson<'a> for Node<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let node: Node = match kind_of(object_of(json)?)? {
            ASTKind::Name => Node::Name(name_from_json(ctx, json)?),
            ASTKind::Document => Document::from_json(ctx, json)?.into(),
            ASTKind::OperationDefinition => OperationDefinition::from_json(ctx, json)?.into(),
            ASTKind::VariableDefinition => VariableDefinition::from_json(ctx, json)?.into(),
            ASTKind::SelectionSet => SelectionSet::from_json(ctx, json)?.into(),
            ASTKind::Field => Field::from_json(ctx, json)?.into(),
            ASTKind::Argument => Argument::from_json(ctx, json)?.into(),
            ASTKind::FragmentSpread => FragmentSpread::from_json(ctx, json)?.into(),
            ASTKind::InlineFragment => InlineFragment::from_json(ctx, json)?.into(),
            ASTKind::FragmentDefinition => FragmentDefinition::from_json(ctx, json)?.into(),
            ASTKind::Variable
            | ASTKind::IntValue
            | ASTKind::FloatValue
            | ASTKind::StringValue
            | ASTKind::BooleanValue
            | ASTKind::NullValue
            | ASTKind::EnumValue
            | ASTKind::ListValue
            | ASTKind::ObjectValue => Value::from_json(ctx, json)?.into(),
            ASTKind::ObjectField => ObjectField::from_json(ctx, json)?.into(),
            ASTKind::Directive => Directive::from_json(ctx, json)?.into(),
            ASTKind::NamedType | ASTKind::ListType | ASTKind::NonNullType => {
                Type::from_json(ctx, json)?.into()
            }
            ASTKind::SchemaDefinition => SchemaDefinition::from_json(ctx, json)?.into(),
            ASTKind::OperationTypeDefinition => {
                OperationTypeDefinition::from_json(ctx, json)?.into()
            }
            ASTKind::ScalarTypeDefinition => ScalarTypeDefinition::from_json(ctx, json)?.into(),
            ASTKind::ObjectTypeDefinition => ObjectTypeDefinition::from_json(ctx, json)?.into(),
            ASTKind::FieldDefinition => FieldDefinition::from_json(ctx, json)?.into(),
            ASTKind::InputValueDefinition => InputValueDefinition::from_json(ctx, json)?.into(),
            ASTKind::InterfaceTypeDefinition => {
                InterfaceTypeDefinition::from_json(ctx, json)?.into()
            }
            ASTKind::UnionTypeDefinition => UnionTypeDefinition::from_json(ctx, json)?.into(),
            ASTKind::EnumTypeDefinition => EnumTypeDefinition::from_json(ctx, json)?.into(),
            ASTKind::EnumValueDefinition => EnumValueDefinition::from_json(ctx, json)?.into(),
            ASTKind::InputObjectTypeDefinition => {
                InputObjectTypeDefinition::from_json(ctx, json)?.into()
            }
            ASTKind::DirectiveDefinition => DirectiveDefinition::from_json(ctx, json)?.into(),
            ASTKind::SchemaExtension => SchemaExtension::from_json(ctx, json)?.into(),
            ASTKind::ScalarTypeExtension => ScalarTypeExtension::from_json(ctx, json)?.into(),
            ASTKind::ObjectTypeExtension => ObjectTypeExtension::from_json(ctx, json)?.into(),
            ASTKind::InterfaceTypeExtension => {
                InterfaceTypeExtension::from_json(ctx, json)?.into()
            }
            ASTKind::UnionTypeExtension => UnionTypeExtension::from_json(ctx, json)?.into(),
            ASTKind::EnumTypeExtension => EnumTypeExtension::from_json(ctx, json)?.into(),
            ASTKind::InputObjectTypeExtension => {
                InputObjectTypeExtension::from_json(ctx, json)?.into()
            }
        };
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorType;
    use indoc::indoc;
    use serde_json::json;

    fn name(value: &str) -> JSValue {
        json!({ "kind": "Name", "value": value })
    }

    fn field(field_name: &str) -> JSValue {
        json!({ "kind": "Field", "name": name(field_name) })
    }

    fn named_type(type_name: &str) -> JSValue {
        json!({ "kind": "NamedType", "name": name(type_name) })
    }

    #[test]
    fn operation() {
        let printed = print_json(&json!({
            "kind": "OperationDefinition",
            "operation": "query",
            "name": name("GetUser"),
            "variableDefinitions": [],
            "selectionSet": {
                "kind": "SelectionSet",
                "selections": [field("id"), field("name")]
            }
        }))
        .unwrap();
        assert_eq!(printed, "query GetUser{ id, name }");
    }

    #[test]
    fn directive() {
        let printed = print_json(&json!({
            "kind": "Directive",
            "name": name("deprecated"),
            "arguments": [{
                "kind": "Argument",
                "name": name("reason"),
                "value": { "kind": "StringValue", "value": "old" }
            }]
        }))
        .unwrap();
        assert_eq!(printed, r#"@deprecated(reason: "old")"#);
    }

    #[test]
    fn enum_definition() {
        let printed = print_json(&json!({
            "kind": "EnumTypeDefinition",
            "name": name("Color"),
            "values": [
                { "kind": "EnumValueDefinition", "name": name("RED") },
                { "kind": "EnumValueDefinition", "name": name("BLUE") }
            ]
        }))
        .unwrap();
        assert_eq!(printed, "enum Color { RED, BLUE }");
    }

    #[test]
    fn list_type() {
        let printed = print_json(&json!({
            "kind": "ListType",
            "type": { "kind": "NonNullType", "type": named_type("Int") }
        }))
        .unwrap();
        assert_eq!(printed, "[Int!]");
    }

    #[test]
    fn object_extension() {
        let printed = print_json(&json!({
            "kind": "ObjectTypeExtension",
            "name": name("Foo"),
            "interfaces": [],
            "directives": [],
            "fields": [{
                "kind": "FieldDefinition",
                "name": name("bar"),
                "arguments": [],
                "type": named_type("String"),
                "directives": []
            }]
        }))
        .unwrap();
        assert_eq!(printed, "extend type Foo { bar: String }");
    }

    #[test]
    fn directive_definition_locations() {
        let printed = print_json(&json!({
            "kind": "DirectiveDefinition",
            "description": { "kind": "StringValue", "value": "Caches a field", "block": true },
            "name": name("cache"),
            "arguments": [{
                "kind": "InputValueDefinition",
                "name": name("ttl"),
                "type": named_type("Int"),
                "defaultValue": { "kind": "IntValue", "value": "0" }
            }],
            "repeatable": true,
            "locations": [name("FIELD_DEFINITION"), "OBJECT"]
        }))
        .unwrap();
        assert_eq!(
            printed,
            "\"\"\"\nCaches a field\n\"\"\"\ndirective @cache(ttl: Int = 0) repeatable on FIELD_DEFINITION | OBJECT"
        );

        let error = print_json(&json!({
            "kind": "DirectiveDefinition",
            "name": "cache",
            "locations": ["NOWHERE"]
        }))
        .unwrap_err();
        assert_eq!(error.error_type(), ErrorType::InvalidNode);
    }

    #[test]
    fn null_prints_empty() {
        assert_eq!(print_json(&JSValue::Null).unwrap(), "");
    }

    #[test]
    fn unknown_kind() {
        let error = print_json(&json!({ "kind": "Bogus" })).unwrap_err();
        assert_eq!(error.error_type(), ErrorType::UnknownNodeKind);
        assert_eq!(error.message(), "No printer exists for node kind 'Bogus'");
    }

    #[test]
    fn nested_unknown_kind_aborts() {
        let error = print_json(&json!({
            "kind": "Document",
            "definitions": [{
                "kind": "OperationDefinition",
                "operation": "query",
                "selectionSet": {
                    "kind": "SelectionSet",
                    "selections": [field("id"), { "kind": "Bogus" }]
                }
            }]
        }))
        .unwrap_err();
        assert_eq!(error.error_type(), ErrorType::UnknownNodeKind);
    }

    #[test]
    fn field_without_name() {
        let error = print_json(&json!({ "kind": "Field", "name": null })).unwrap_err();
        assert_eq!(error.error_type(), ErrorType::InvalidNode);
        assert_eq!(error.message(), "Field is missing its required 'name' field");

        let error = print_json(&json!({ "kind": "Field" })).unwrap_err();
        assert_eq!(error.error_type(), ErrorType::InvalidNode);
    }

    #[test]
    fn misplaced_nodes() {
        let error = print_json(&json!({
            "kind": "SelectionSet",
            "selections": [named_type("User")]
        }))
        .unwrap_err();
        assert_eq!(error.error_type(), ErrorType::InvalidNode);

        let error = print_json(&json!({
            "kind": "OperationDefinition",
            "operation": "select",
            "selectionSet": { "kind": "SelectionSet", "selections": [field("id")] }
        }))
        .unwrap_err();
        assert_eq!(error.error_type(), ErrorType::InvalidNode);

        let error = print_json(&json!(["not", "a", "node"])).unwrap_err();
        assert_eq!(error.error_type(), ErrorType::InvalidNode);
    }

    #[test]
    fn descriptions_where_none_can_print() {
        let description = json!({ "kind": "StringValue", "value": "lost", "block": false });

        let error = print_json(&json!({
            "kind": "Field",
            "name": "id",
            "description": description
        }))
        .unwrap_err();
        assert_eq!(error.error_type(), ErrorType::InvalidNode);
        assert_eq!(error.message(), "Field can't carry a description");

        let error = print_json(&json!({
            "kind": "ObjectTypeExtension",
            "name": "User",
            "description": description,
            "fields": []
        }))
        .unwrap_err();
        assert_eq!(error.error_type(), ErrorType::InvalidNode);

        let printed = print_json(&json!({
            "kind": "ScalarTypeExtension",
            "name": "Date",
            "description": null
        }))
        .unwrap();
        assert_eq!(printed, "extend scalar Date");

        let printed = print_json(&json!({
            "kind": "ScalarTypeDefinition",
            "name": "Date",
            "description": description
        }))
        .unwrap();
        assert_eq!(printed, "\"lost\"\nscalar Date");
    }

    #[test]
    fn plain_string_names() {
        let ctx = ASTContext::new();
        let field = Field::from_json(
            &ctx,
            &json!({ "kind": "Field", "alias": "me", "name": "viewer", "selectionSet": null }),
        )
        .unwrap();
        assert_eq!(field, Field::new_aliased_leaf(&ctx, "me", "viewer"));
    }

    #[test]
    fn kitchen_sink() {
        let json: JSValue =
            serde_json::from_str(include_str!("../../fixture/kitchen_sink.json")).unwrap();
        assert_eq!(
            print_json(&json).unwrap(),
            include_str!("../../fixture/kitchen_sink.printed.graphql")
        );
    }

    #[test]
    fn schema_kitchen_sink() {
        let json: JSValue =
            serde_json::from_str(include_str!("../../fixture/schema_kitchen_sink.json")).unwrap();
        assert_eq!(
            print_json(&json).unwrap(),
            include_str!("../../fixture/schema_kitchen_sink.printed.graphql")
        );
    }

    #[test]
    fn reparses_as_same_document() {
        let printed = print_json(&json!({
            "kind": "Document",
            "definitions": [
                {
                    "kind": "OperationDefinition",
                    "operation": "query",
                    "name": name("Feed"),
                    "variableDefinitions": [{
                        "kind": "VariableDefinition",
                        "variable": { "kind": "Variable", "name": name("after") },
                        "type": named_type("String"),
                        "defaultValue": { "kind": "NullValue" },
                        "directives": []
                    }],
                    "directives": [],
                    "selectionSet": {
                        "kind": "SelectionSet",
                        "selections": [{
                            "kind": "Field",
                            "alias": name("items"),
                            "name": name("feed"),
                            "arguments": [{
                                "kind": "Argument",
                                "name": name("after"),
                                "value": { "kind": "Variable", "name": name("after") }
                            }],
                            "directives": [{
                                "kind": "Directive",
                                "name": name("include"),
                                "arguments": [{
                                    "kind": "Argument",
                                    "name": name("if"),
                                    "value": { "kind": "BooleanValue", "value": true }
                                }]
                            }],
                            "selectionSet": {
                                "kind": "SelectionSet",
                                "selections": [
                                    field("id"),
                                    {
                                        "kind": "FragmentSpread",
                                        "name": name("PostParts"),
                                        "directives": []
                                    }
                                ]
                            }
                        }]
                    }
                },
                {
                    "kind": "FragmentDefinition",
                    "name": name("PostParts"),
                    "typeCondition": named_type("Post"),
                    "directives": [],
                    "selectionSet": {
                        "kind": "SelectionSet",
                        "selections": [field("title")]
                    }
                }
            ]
        }))
        .unwrap();
        assert_eq!(
            printed,
            "query Feed($after: String = null){ items: feed(after: $after) @include(if: true) { id, ...PostParts } }\n\nfragment PostParts on Post { title }"
        );

        let expected = indoc! {r#"
            query Feed($after: String = null) {
              items: feed(after: $after) @include(if: true) {
                id
                ...PostParts
              }
            }

            fragment PostParts on Post {
              title
            }
        "#};
        let reparsed = graphql_parser::parse_query::<&str>(&printed).unwrap();
        let reference = graphql_parser::parse_query::<&str>(expected).unwrap();
        assert_eq!(reparsed.to_string(), reference.to_string());
    }
}
