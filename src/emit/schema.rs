//! Implementation file emitter.
//!
//! One file per component per supported version: the runtime class, its
//! spec capability table, and the schema-description builder feeding the
//! validator. These are the files developers extend by hand, so they carry
//! `HEADER`, `SCHEMA_DEFINITION`, `BODY` and `FOOTER` custom regions.

use std::collections::BTreeSet;

use crate::config::{ComponentModel, SpecVersion, VersionModel};
use crate::grammar::{Primitive, Property, PropertyType};
use crate::naming::safe_var_name;

use super::{custom_region, property_types, warning_banner};

pub fn implementation_file(
    component: &ComponentModel,
    version: SpecVersion,
    model: &VersionModel,
) -> String {
    let name = &component.name;
    let v = version.suffix();
    let mut deps: BTreeSet<String> = BTreeSet::new();
    let mut body = String::new();

    body.push_str(&custom_region("HEADER", ""));
    body.push('\n');

    if model.schema_is_cacheable {
        deps.insert(format!("I{name}{v}Definition"));
        deps.insert(format!("I{name}{v}"));
        body.push_str(&format!(
            "let cachedSchema: ISchema.IDefinition<I{name}{v}Definition, I{name}{v}> | null = null\n\n"
        ));
    }

    body.push_str(&format!(
        "export class {name} extends ApiComponent implements I{name}{v} {{\n"
    ));
    if model.allows_extensions {
        body.push_str("  [extension: `x-${string}`]: any\n");
    }
    if let Some(additional) = &model.additional_properties {
        body.push_str(&format!(
            "  [key: {}]: {}\n",
            model.key_pattern,
            property_types(additional, v, false, Some(&mut deps))
        ));
    }
    for property in &model.properties {
        let marker = if property.required { "!" } else { "?" };
        body.push_str(&format!(
            "  {}{marker}: {}\n",
            property.key,
            property_types(property, v, false, Some(&mut deps))
        ));
    }
    if !model.properties.is_empty() {
        body.push('\n');
    }

    body.push_str(&format!(
        "  constructor (definition: I{name}{v}Definition, version?: IVersion) {{\n"
    ));
    body.push_str("    super(definition, version, arguments[2])\n");
    body.push_str("  }\n\n");

    spec_table(&mut body, component, version);
    get_schema(&mut body, component, v, model, &mut deps);

    body.push_str(&format!(
        "  static validate (definition: I{name}{v}Definition, version?: IVersion): ExceptionStore {{\n"
    ));
    body.push_str("    return super.validate(definition, version, arguments[2])\n");
    body.push_str("  }\n\n");

    body.push_str(&custom_region("BODY", "  "));
    body.push_str("}\n\n");
    body.push_str(&custom_region("FOOTER", ""));

    // Imports are assembled last: emitting the body is what discovers
    // which component symbols the file references.
    let mut out = warning_banner();
    out.push_str("import { IComponentSpec, IVersion } from '../IComponent'\n");
    out.push_str("import { ApiComponent } from '../Component'\n");
    out.push_str("import { ExceptionStore } from '../../Exception/ExceptionStore'\n");
    out.push_str("import * as ISchema from '../IComponentSchema'\n");
    out.push_str("import { ISchemaProcessor } from '../ISchemaProcessor'\n");
    if !deps.is_empty() {
        let list: Vec<String> = deps.into_iter().collect();
        out.push_str("import {\n  ");
        out.push_str(&list.join(",\n  "));
        out.push_str("\n} from '../'\n");
    }
    out.push_str(&body);
    out
}

/// The capability table mapping every known spec revision to `false`
/// (unsupported), `true` (supported, defined elsewhere) or the canonical
/// definition URL for the version this file implements.
fn spec_table(out: &mut String, component: &ComponentModel, version: SpecVersion) {
    out.push_str("  static spec: IComponentSpec = {\n");

    let mut rows: Vec<String> = Vec::new();
    for known in SpecVersion::ALL {
        for revision in known.revisions() {
            let row = if !component.supports(known) {
                format!("    '{revision}': false")
            } else if known == version {
                format!(
                    "    '{revision}': 'https://spec.openapis.org/oas/v{revision}#{}-object'",
                    component.reference
                )
            } else {
                format!("    '{revision}': true")
            };
            rows.push(row);
        }
    }
    out.push_str(&rows.join(",\n"));
    out.push_str("\n  }\n\n");
}

fn get_schema(
    out: &mut String,
    component: &ComponentModel,
    v: &str,
    model: &VersionModel,
    deps: &mut BTreeSet<String>,
) {
    let name = &component.name;

    out.push_str(&format!(
        "  static getSchema (data: ISchemaProcessor): ISchema.IDefinition<I{name}{v}Definition, I{name}{v}> {{\n"
    ));
    if model.schema_is_cacheable {
        out.push_str("    if (cachedSchema !== null) {\n");
        out.push_str("      return cachedSchema\n");
        out.push_str("    }\n\n");
    }

    if let Some(additional) = &model.additional_properties {
        if additional.types.len() == 1 {
            out.push_str(&format!(
                "    const additionalProperties: {} = ",
                ischema_type(additional, v, deps)
            ));
            out.push_str(&alternative_literal(&additional.types[0], additional, "    ", v, deps));
        } else {
            out.push_str("    const additionalProperties: ISchema.IOneOf = ");
            out.push_str(&one_of_literal(additional, "    ", v, deps));
        }
        out.push_str("\n\n");
    }

    for property in &model.properties {
        out.push_str(&format!(
            "    const {}: ISchema.IProperty<{}> = ",
            safe_var_name(&property.key),
            ischema_type(property, v, deps)
        ));
        out.push_str(&property_literal(property, "    ", v, deps));
        out.push_str("\n\n");
    }

    out.push_str(&format!(
        "    const schema: ISchema.IDefinition<I{name}{v}Definition, I{name}{v}> = {{\n"
    ));
    out.push_str("      type: 'object',\n");
    out.push_str(&format!(
        "      allowsSchemaExtensions: {}",
        model.allows_extensions
    ));
    if model.additional_properties.is_some() {
        out.push_str(",\n      additionalProperties");
    }
    if !model.properties.is_empty() {
        let vars: Vec<String> = model
            .properties
            .iter()
            .map(|property| safe_var_name(&property.key))
            .collect();
        out.push_str(",\n      properties: [\n        ");
        out.push_str(&vars.join(",\n        "));
        out.push_str("\n      ]");
    }
    out.push_str("\n    }\n\n");

    out.push_str(&custom_region("SCHEMA_DEFINITION", "    "));
    out.push('\n');
    if model.schema_is_cacheable {
        out.push_str("    cachedSchema = schema\n");
    }
    out.push_str("    return schema\n");
    out.push_str("  }\n\n");
}

/// The `ISchema` descriptor type for one property, as written in the
/// emitted const declarations.
fn ischema_type(property: &Property, v: &str, deps: &mut BTreeSet<String>) -> String {
    if property.types.len() != 1 {
        return "ISchema.IOneOf".to_string();
    }

    let inner = match &property.types[0] {
        PropertyType::Component { name } => {
            let definition = format!("I{name}{v}Definition");
            let built = format!("I{name}{v}");
            deps.insert(definition.clone());
            deps.insert(built.clone());
            format!("ISchema.IComponent<{definition}, {built}>")
        }
        _ if !property.enum_values.is_empty() => "ISchema.IString".to_string(),
        PropertyType::Primitive(primitive) => match primitive {
            Primitive::Array => "ISchema.IArray<any>".to_string(),
            Primitive::Boolean => "ISchema.IBoolean".to_string(),
            Primitive::Number => "ISchema.INumber".to_string(),
            Primitive::Object => "ISchema.IObject".to_string(),
            Primitive::String => "ISchema.IString".to_string(),
            Primitive::Any => "any".to_string(),
        },
        PropertyType::Literal(_) => "any".to_string(),
    };

    if property.is_array {
        format!("ISchema.IArray<{inner}>")
    } else if property.is_map {
        format!("ISchema.IObject<{inner}>")
    } else {
        inner
    }
}

/// One `ISchema.IProperty` object literal.
fn property_literal(
    property: &Property,
    indent: &str,
    v: &str,
    deps: &mut BTreeSet<String>,
) -> String {
    let next = format!("\n{indent}");
    let mut result = String::from("{");
    result.push_str(&next);

    result.push_str(&format!("  name: '{}',", property.key));
    result.push_str(&next);
    if property.required {
        result.push_str("  required: true,");
        result.push_str(&next);
    }

    if property.types.len() == 1 {
        result.push_str("  schema: ");
        result.push_str(&alternative_literal(
            &property.types[0],
            property,
            &format!("{indent}  "),
            v,
            deps,
        ));
        result.push_str(&next);
    } else {
        result.push_str("  schema: {");
        result.push_str(&next);
        result.push_str("    type: 'oneOf',");
        result.push_str(&next);
        result.push_str("    oneOf: [");
        result.push_str(&next);
        for (index, alternative) in property.types.iter().enumerate() {
            result.push_str("      {");
            result.push_str(&next);
            result.push_str(&format!(
                "        condition: () => {},",
                if index == 0 { "true" } else { "false" }
            ));
            result.push_str(&next);
            result.push_str("        schema: ");
            result.push_str(&alternative_literal(
                alternative,
                property,
                &format!("{indent}        "),
                v,
                deps,
            ));
            result.push_str(&next);
            result.push_str(if index + 1 < property.types.len() {
                "      },"
            } else {
                "      }"
            });
            result.push_str(&next);
        }
        result.push_str("    ],");
        result.push_str(&next);
        result.push_str("    error: () => {}");
        result.push_str(&next);
        result.push_str("  }");
        result.push_str(&next);
    }

    result.push('}');
    result
}

/// A standalone one-of descriptor, used for multi-type additional
/// properties. Alternatives are ordered: the first condition matches.
fn one_of_literal(
    property: &Property,
    indent: &str,
    v: &str,
    deps: &mut BTreeSet<String>,
) -> String {
    let next = format!("\n{indent}");
    let mut result = String::from("{");
    result.push_str(&next);
    result.push_str("  type: 'oneOf',");
    result.push_str(&next);
    result.push_str("  oneOf: [");
    result.push_str(&next);
    for (index, alternative) in property.types.iter().enumerate() {
        result.push_str("    {");
        result.push_str(&next);
        result.push_str(&format!(
            "      condition: () => {},",
            if index == 0 { "true" } else { "false" }
        ));
        result.push_str(&next);
        result.push_str("      schema: ");
        result.push_str(&alternative_literal(
            alternative,
            property,
            &format!("{indent}      "),
            v,
            deps,
        ));
        result.push_str(&next);
        result.push_str(if index + 1 < property.types.len() {
            "    },"
        } else {
            "    }"
        });
        result.push_str(&next);
    }
    result.push_str("  ],");
    result.push_str(&next);
    result.push_str("  error: () => {}");
    result.push_str(&next);
    result.push('}');
    result
}

/// The schema descriptor for one type alternative, honouring the
/// property's enum and array/map wrappers.
fn alternative_literal(
    alternative: &PropertyType,
    property: &Property,
    indent: &str,
    v: &str,
    deps: &mut BTreeSet<String>,
) -> String {
    let next = format!("\n{indent}");
    let mut result = String::from("{");
    result.push_str(&next);

    let type_fields: Vec<String> = match alternative {
        PropertyType::Component { name } => {
            let dependency = format!("{name}{v}");
            deps.insert(dependency.clone());
            vec![
                "type: 'component'".to_string(),
                format!("allowsRef: {}", property.ref_allowed),
                format!("component: {dependency}"),
            ]
        }
        PropertyType::Primitive(primitive) => vec![format!("type: '{}'", primitive.as_str())],
        PropertyType::Literal(raw) => vec![format!("type: '{raw}'")],
    };

    if !property.enum_values.is_empty() {
        result.push_str("  type: 'string',");
        result.push_str(&next);
        result.push_str(&format!("  enum: ['{}']", property.enum_values.join("', '")));
        result.push_str(&next);
    } else if property.is_array {
        result.push_str("  type: 'array',");
        result.push_str(&next);
        result.push_str("  items: {");
        result.push_str(&next);
        result.push_str("    ");
        result.push_str(&type_fields.join(&format!(",{next}    ")));
        result.push_str(&next);
        result.push_str("  }");
        result.push_str(&next);
    } else if property.is_map {
        result.push_str("  type: 'object',");
        result.push_str(&next);
        result.push_str("  additionalProperties: {");
        result.push_str(&next);
        result.push_str("    ");
        result.push_str(&type_fields.join(&format!(",{next}    ")));
        result.push_str(&next);
        result.push_str("  }");
        result.push_str(&next);
    } else {
        result.push_str("  ");
        result.push_str(&type_fields.join(&format!(",{next}  ")));
        result.push_str(&next);
    }

    result.push('}');
    result
}
