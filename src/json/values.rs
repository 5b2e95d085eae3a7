use serde_json::Value as JSValue;

use super::conversion::{kind_of, list_of, name_of, node_of, object_of, required, scalar_of};
use super::NodeFromJson;
use crate::ast::*;
use crate::error::{Error, Result};

impl<'a> NodeFromJson<'a> for Value<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let node = object_of(json)?;
        match kind_of(node)? {
            ASTKind::Variable => Ok(Value::Variable(Variable::from_json(ctx, json)?)),
            ASTKind::IntValue => Ok(Value::Int(IntValue {
                value: scalar_of(ctx, node, "value")?,
            })),
            ASTKind::FloatValue => Ok(Value::Float(FloatValue {
                value: scalar_of(ctx, node, "value")?,
            })),
            ASTKind::StringValue => Ok(Value::String(StringValue::from_json(ctx, json)?)),
            ASTKind::BooleanValue => match node.get("value") {
                Some(JSValue::Bool(value)) => Ok(Value::Boolean((*value).into())),
                _ => Err(Error::new("BooleanValue requires a boolean 'value'", None)),
            },
            ASTKind::NullValue => Ok(Value::Null),
            ASTKind::EnumValue => Ok(Value::Enum(EnumValue {
                value: scalar_of(ctx, node, "value")?,
            })),
            ASTKind::ListValue => Ok(Value::List(ListValue {
                children: list_of(ctx, node, "values")?,
            })),
            ASTKind::ObjectValue => Ok(Value::Object(ObjectValue {
                children: list_of(ctx, node, "fields")?,
            })),
            kind => Err(Error::new(
                format!("Expected a value node but received {kind}"),
                None,
            )),
        }
    }
}

impl<'a> NodeFromJson<'a> for Variable<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let node = node_of(json, ASTKind::Variable)?;
        Ok(Variable {
            name: name_of(ctx, node, "name")?,
        })
    }
}

impl<'a> NodeFromJson<'a> for StringValue<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let node = node_of(json, ASTKind::StringValue)?;
        Ok(StringValue {
            value: scalar_of(ctx, node, "value")?,
            block: node.get("block").and_then(JSValue::as_bool).unwrap_or(false),
        })
    }
}

impl<'a> NodeFromJson<'a> for ObjectField<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let node = node_of(json, ASTKind::ObjectField)?;
        Ok(ObjectField {
            name: name_of(ctx, node, "name")?,
            value: required(ctx, node, "value")?,
        })
    }
}

impl<'a> NodeFromJson<'a> for NamedType<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let node = node_of(json, ASTKind::NamedType)?;
        Ok(NamedType {
            name: name_of(ctx, node, "name")?,
        })
    }
}

impl<'a> NodeFromJson<'a> for Type<'a> {
    fn from_json(ctx: &'a ASTContext, json: &JSValue) -> Result<Self> {
        let node = object_of(json)?;
        match kind_of(node)? {
            ASTKind::NamedType => Ok(Type::NamedType(NamedType::from_json(ctx, json)?)),
            ASTKind::ListType => {
                let inner: Type = required(ctx, node, "type")?;
                Ok(Type::ListType(ctx.alloc(inner)))
            }
            ASTKind::NonNullType => {
                let inner: Type = required(ctx, node, "type")?;
                Ok(Type::NonNullType(ctx.alloc(inner)))
            }
            kind => Err(Error::new(
                format!("Expected a type node but received {kind}"),
                None,
            )),
        }
    }
}
