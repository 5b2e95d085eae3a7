use super::ast::*;
use super::compose::{join_list, join_with_separators, keyword, stringify, text};
use super::printer::PrintNode;
use std::{fmt, fmt::Write};

impl PrintNode for DirectiveLocation {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(self.as_str())
    }
}

impl<'a> PrintNode for OperationTypeDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        join_with_separators(
            buffer,
            &["", ": ", ""],
            &[text(self.operation.as_str()), stringify(&self.of_type)],
        )
    }
}

fn write_schema(
    buffer: &mut dyn Write,
    directives: &Directives,
    operation_types: &[OperationTypeDefinition],
) -> fmt::Result {
    join_with_separators(
        buffer,
        &["", " ", " { ", " }"],
        &[
            text("schema"),
            join_list(directives.children.iter(), " "),
            join_list(operation_types.iter(), ", "),
        ],
    )
}

impl<'a> PrintNode for SchemaDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        write_schema(buffer, &self.directives, &self.operation_types)
    }

    #[inline]
    fn description(&self) -> Option<&StringValue<'_>> {
        self.description.as_ref()
    }
}

fn write_scalar(buffer: &mut dyn Write, name: &str, directives: &Directives) -> fmt::Result {
    join_with_separators(
        buffer,
        &["scalar ", " ", ""],
        &[text(name), join_list(directives.children.iter(), " ")],
    )
}

impl<'a> PrintNode for ScalarTypeDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        write_scalar(buffer, self.name, &self.directives)
    }

    #[inline]
    fn description(&self) -> Option<&StringValue<'_>> {
        self.description.as_ref()
    }
}

/// Shared rule for Object and Interface types, which only differ in their keyword.
fn write_fields_type(
    buffer: &mut dyn Write,
    introducer: &str,
    name: &str,
    interfaces: &[NamedType],
    directives: &Directives,
    fields: &[FieldDefinition],
) -> fmt::Result {
    join_with_separators(
        buffer,
        &[introducer, " implements ", " ", " { ", " }"],
        &[
            text(name),
            join_list(interfaces.iter(), " & "),
            join_list(directives.children.iter(), " "),
            join_list(fields.iter(), ", "),
        ],
    )
}

impl<'a> PrintNode for ObjectTypeDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        write_fields_type(
            buffer,
            "type ",
            self.name,
            &self.interfaces,
            &self.directives,
            &self.fields,
        )
    }

    #[inline]
    fn description(&self) -> Option<&StringValue<'_>> {
        self.description.as_ref()
    }
}

impl<'a> PrintNode for InterfaceTypeDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        write_fields_type(
            buffer,
            "interface ",
            self.name,
            &self.interfaces,
            &self.directives,
            &self.fields,
        )
    }

    #[inline]
    fn description(&self) -> Option<&StringValue<'_>> {
        self.description.as_ref()
    }
}

impl<'a> PrintNode for FieldDefinition<'a> {
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        join_with_separators(
            buffer,
            &["", "(", ")"],
            &[text(self.name), join_list(self.arguments.iter(), ", ")],
        )?;
        join_with_separators(
            buffer,
            &[": ", " ", ""],
            &[
                stringify(&self.of_type),
                join_list(self.directives.children.iter(), " "),
            ],
        )
    }

    #[inline]
    fn description(&self) -> Option<&StringValue<'_>> {
        self.description.as_ref()
    }
}

impl<'a> PrintNode for InputValueDefinition<'a> {
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        join_with_separators(
            buffer,
            &["", ": ", " = ", " ", ""],
            &[
                text(self.name),
                stringify(&self.of_type),
                stringify(&self.default_value),
                join_list(self.directives.children.iter(), " "),
            ],
        )
    }

    #[inline]
    fn description(&self) -> Option<&StringValue<'_>> {
        self.description.as_ref()
    }
}

fn write_union(
    buffer: &mut dyn Write,
    name: &str,
    directives: &Directives,
    types: &[NamedType],
) -> fmt::Result {
    join_with_separators(
        buffer,
        &["union ", " ", " = ", ""],
        &[
            text(name),
            join_list(directives.children.iter(), " "),
            join_list(types.iter(), " | "),
        ],
    )
}

impl<'a> PrintNode for UnionTypeDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        write_union(buffer, self.name, &self.directives, &self.types)
    }

    #[inline]
    fn description(&self) -> Option<&StringValue<'_>> {
        self.description.as_ref()
    }
}

impl<'a> PrintNode for EnumValueDefinition<'a> {
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        join_with_separators(
            buffer,
            &["", " ", ""],
            &[
                text(self.name),
                join_list(self.directives.children.iter(), " "),
            ],
        )
    }

    #[inline]
    fn description(&self) -> Option<&StringValue<'_>> {
        self.description.as_ref()
    }
}

fn write_enum(
    buffer: &mut dyn Write,
    name: &str,
    directives: &Directives,
    values: &[EnumValueDefinition],
) -> fmt::Result {
    join_with_separators(
        buffer,
        &["enum ", " ", " { ", " }"],
        &[
            text(name),
            join_list(directives.children.iter(), " "),
            join_list(values.iter(), ", "),
        ],
    )
}

impl<'a> PrintNode for EnumTypeDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        write_enum(buffer, self.name, &self.directives, &self.values)
    }

    #[inline]
    fn description(&self) -> Option<&StringValue<'_>> {
        self.description.as_ref()
    }
}

fn write_input_object(
    buffer: &mut dyn Write,
    name: &str,
    directives: &Directives,
    fields: &[InputValueDefinition],
) -> fmt::Result {
    join_with_separators(
        buffer,
        &["input ", " ", " { ", " }"],
        &[
            text(name),
            join_list(directives.children.iter(), " "),
            join_list(fields.iter(), ", "),
        ],
    )
}

impl<'a> PrintNode for InputObjectTypeDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        write_input_object(buffer, self.name, &self.directives, &self.fields)
    }

    #[inline]
    fn description(&self) -> Option<&StringValue<'_>> {
        self.description.as_ref()
    }
}

impl<'a> PrintNode for DirectiveDefinition<'a> {
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        join_with_separators(
            buffer,
            &["directive @", "(", ")"],
            &[text(self.name), join_list(self.arguments.iter(), ", ")],
        )?;
        join_with_separators(buffer, &[" ", ""], &[keyword(self.repeatable, "repeatable")])?;
        join_with_separators(
            buffer,
            &[" on ", ""],
            &[join_list(self.locations.iter(), " | ")],
        )
    }

    #[inline]
    fn description(&self) -> Option<&StringValue<'_>> {
        self.description.as_ref()
    }
}

// Extensions print with `extend ` followed by their base definition's rule, applied to the
// extension's own fields. Nothing is copied, so printing leaves the arena untouched.

impl<'a> PrintNode for SchemaExtension<'a> {
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("extend ")?;
        write_schema(buffer, &self.directives, &self.operation_types)
    }
}

impl<'a> PrintNode for ScalarTypeExtension<'a> {
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("extend ")?;
        write_scalar(buffer, self.name, &self.directives)
    }
}

impl<'a> PrintNode for ObjectTypeExtension<'a> {
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("extend ")?;
        write_fields_type(
            buffer,
            "type ",
            self.name,
            &self.interfaces,
            &self.directives,
            &self.fields,
        )
    }
}

impl<'a> PrintNode for InterfaceTypeExtension<'a> {
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("extend ")?;
        write_fields_type(
            buffer,
            "interface ",
            self.name,
            &self.interfaces,
            &self.directives,
            &self.fields,
        )
    }
}

impl<'a> PrintNode for UnionTypeExtension<'a> {
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("extend ")?;
        write_union(buffer, self.name, &self.directives, &self.types)
    }
}

impl<'a> PrintNode for EnumTypeExtension<'a> {
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("extend ")?;
        write_enum(buffer, self.name, &self.directives, &self.values)
    }
}

impl<'a> PrintNode for InputObjectTypeExtension<'a> {
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("extend ")?;
        write_input_object(buffer, self.name, &self.directives, &self.fields)
    }
}
