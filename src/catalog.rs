//! Builtin OpenAPI component catalog.
//!
//! The full set of OpenAPI 2.0 / 3.0.x object definitions this generator
//! ships with, expressed in the compact property grammar. `generate` and
//! friends fall back to this catalog when no catalog file is given.

use crate::config::{ComponentConfig, ComponentsConfig, SpecVersion, VersionConfig};

fn v3_only(config: VersionConfig) -> ComponentConfig {
    ComponentConfig::new().with_version(SpecVersion::V3, config)
}

fn both(v2: VersionConfig, v3: VersionConfig) -> ComponentConfig {
    ComponentConfig::new()
        .with_version(SpecVersion::V2, v2)
        .with_version(SpecVersion::V3, v3)
}

/// The builtin catalog covering the OpenAPI 2.0 and 3.0.x objects.
pub fn openapi_catalog() -> ComponentsConfig {
    let mut catalog = ComponentsConfig::new();

    catalog.insert(
        "Callback",
        v3_only(
            VersionConfig::new()
                .allows_extensions(true)
                .additional_properties("PathItem"),
        ),
    );

    catalog.insert(
        "Components",
        v3_only(VersionConfig::new().allows_extensions(true).properties(&[
            ("schemas", "Schema|Reference{}"),
            ("responses", "Response|Reference{}"),
            ("parameters", "Parameter|Reference{}"),
            ("examples", "Example|Reference{}"),
            ("requestBodies", "RequestBody|Reference{}"),
            ("headers", "Header|Reference{}"),
            ("securitySchemes", "SecurityScheme|Reference{}"),
            ("links", "Link|Reference{}"),
            ("callbacks", "Callback|Reference{}"),
        ])),
    );

    catalog.insert(
        "Contact",
        both(
            VersionConfig::new().allows_extensions(true).properties(&[
                ("name", "string"),
                ("url", "string"),
                ("email", "string"),
            ]),
            VersionConfig::new().allows_extensions(true).properties(&[
                ("name", "string"),
                ("url", "string"),
                ("email", "string"),
            ]),
        ),
    );

    catalog.insert(
        "Discriminator",
        v3_only(VersionConfig::new().allows_extensions(false).properties(&[
            ("propertyName", "string!"),
            ("mapping", "string{}"),
        ])),
    );

    catalog.insert(
        "Encoding",
        v3_only(VersionConfig::new().allows_extensions(true).properties(&[
            ("contentType", "string"),
            ("headers", "Header|Reference{}"),
            ("style", "string"),
            ("explode", "boolean"),
            ("allowReserved", "boolean"),
        ])),
    );

    catalog.insert(
        "Example",
        both(
            VersionConfig::new()
                .allows_extensions(false)
                .additional_properties("any"),
            VersionConfig::new().allows_extensions(true).properties(&[
                ("summary", "string"),
                ("description", "string"),
                ("value", "any"),
                ("externalValue", "string"),
            ]),
        ),
    );

    catalog.insert(
        "External Documentation",
        both(
            VersionConfig::new()
                .allows_extensions(true)
                .properties(&[("description", "string"), ("url", "string!")]),
            VersionConfig::new()
                .allows_extensions(true)
                .properties(&[("description", "string"), ("url", "string!")]),
        ),
    );

    catalog.insert(
        "Link",
        v3_only(VersionConfig::new().allows_extensions(true).properties(&[
            ("operationRef", "string"),
            ("operationId", "string"),
            ("parameters", "any{}"),
            ("requestBody", "any"),
            ("description", "string"),
            ("server", "Server"),
        ])),
    );

    catalog.insert(
        "Header",
        both(
            VersionConfig::new().allows_extensions(true).properties(&[
                ("description", "string"),
                ("type", "'array'|'boolean'|'integer'|'number'|'string'!"),
                ("format", "string"),
                ("items", "Items"),
                ("collectionFormat", "'csv'|'ssv'|'tsv'|'pipes'"),
                ("default", "any"),
                ("maximum", "number"),
                ("exclusiveMaximum", "number"),
                ("minimum", "number"),
                ("exclusiveMinimum", "number"),
                ("maxLength", "number"),
                ("minLength", "number"),
                ("pattern", "string"),
                ("maxItems", "number"),
                ("minItems", "number"),
                ("uniqueItems", "boolean"),
                ("enum", "any[]"),
                ("multipleOf", "number"),
            ]),
            VersionConfig::new().allows_extensions(true).properties(&[
                ("description", "string"),
                ("required", "boolean"),
                ("deprecated", "boolean"),
                ("allowEmptyValue", "boolean"),
                ("style", "'simple'"),
                ("explode", "boolean"),
                ("allowReserved", "boolean"),
                ("schema", "Schema|Reference"),
                ("example", "any"),
                ("examples", "Example|Reference{}"),
                ("content", "MediaType{}"),
            ]),
        ),
    );

    catalog.insert(
        "Info",
        both(
            VersionConfig::new().allows_extensions(true).properties(&[
                ("title", "string!"),
                ("description", "string"),
                ("termsOfService", "string"),
                ("contact", "Contact"),
                ("license", "License"),
                ("version", "string!"),
            ]),
            VersionConfig::new().allows_extensions(true).properties(&[
                ("title", "string!"),
                ("description", "string"),
                ("termsOfService", "string"),
                ("contact", "Contact"),
                ("license", "License"),
                ("version", "string!"),
            ]),
        ),
    );

    catalog.insert(
        "License",
        both(
            VersionConfig::new()
                .allows_extensions(true)
                .properties(&[("name", "string!"), ("url", "string")]),
            VersionConfig::new()
                .allows_extensions(true)
                .properties(&[("name", "string!"), ("url", "string")]),
        ),
    );

    catalog.insert(
        "Media Type",
        v3_only(VersionConfig::new().allows_extensions(true).properties(&[
            ("schema", "Schema|Reference"),
            ("example", "any"),
            ("examples", "Example|Reference{}"),
            ("encoding", "Encoding{}"),
        ])),
    );

    catalog.insert(
        "OAuth Flow",
        v3_only(VersionConfig::new().allows_extensions(true).properties(&[
            ("authorizationUrl", "string"),
            ("tokenUrl", "string"),
            ("refreshUrl", "string"),
            ("scopes", "string{}"),
        ])),
    );

    catalog.insert(
        "OAuth Flows",
        v3_only(VersionConfig::new().allows_extensions(true).properties(&[
            ("implicit", "OAuth Flow"),
            ("password", "OAuth Flow"),
            ("clientCredentials", "OAuth Flow"),
            ("authorizationCode", "OAuth Flow"),
        ])),
    );

    catalog.insert(
        "OpenAPI",
        v3_only(VersionConfig::new().allows_extensions(true).properties(&[
            ("openapi", "string!"),
            ("info", "Info!"),
            ("servers", "Server[]"),
            ("paths", "Paths!"),
            ("components", "Components"),
            ("security", "SecurityRequirement[]"),
            ("tags", "Tag[]"),
            ("externalDocs", "ExternalDocumentation"),
        ])),
    );

    catalog.insert(
        "Operation",
        both(
            VersionConfig::new().allows_extensions(true).properties(&[
                ("tags", "string[]"),
                ("summary", "string"),
                ("description", "string"),
                ("externalDocs", "ExternalDocumentation"),
                ("operationId", "string"),
                ("consumes", "string[]"),
                ("produces", "string[]"),
                ("parameters", "Parameter[]"),
                ("responses", "Responses!"),
                ("schemes", "string[]"),
                ("deprecated", "boolean"),
                ("security", "SecurityRequirement[]"),
            ]),
            VersionConfig::new().allows_extensions(true).properties(&[
                ("tags", "string[]"),
                ("summary", "string"),
                ("description", "string"),
                ("externalDocs", "ExternalDocumentation"),
                ("operationId", "string"),
                ("parameters", "Parameter|Reference[]"),
                ("requestBody", "RequestBody|Reference"),
                ("responses", "Responses!"),
                ("callbacks", "Callback|Reference{}"),
                ("deprecated", "boolean"),
                ("security", "SecurityRequirement[]"),
                ("servers", "Server[]"),
            ]),
        ),
    );

    catalog.insert(
        "Parameter",
        both(
            VersionConfig::new().allows_extensions(true).properties(&[
                ("name", "string!"),
                ("in", "'body'|'formData'|'header'|'path'|'query'!"),
                ("description", "string"),
                ("required", "boolean"),
                ("schema", "Schema"),
                ("type", "'array'|'boolean'|'file'|'integer'|'number'|'string'"),
                ("format", "string"),
                ("allowEmptyValue", "boolean"),
                ("items", "Items"),
                ("collectionFormat", "'csv'|'ssv'|'tsv'|'pipes'|'multi'"),
                ("default", "any"),
                ("maximum", "number"),
                ("exclusiveMaximum", "boolean"),
                ("minimum", "number"),
                ("exclusiveMinimum", "number"),
                ("maxLength", "number"),
                ("minLength", "number"),
                ("pattern", "string"),
                ("maxItems", "number"),
                ("minItems", "number"),
                ("uniqueItems", "boolean"),
                ("enum", "any[]"),
                ("multipleOf", "number"),
            ]),
            VersionConfig::new().allows_extensions(true).properties(&[
                ("name", "string!"),
                ("in", "'cookie'|'header'|'path'|'query'!"),
                ("description", "string"),
                ("required", "boolean"),
                ("deprecated", "boolean"),
                ("allowEmptyValue", "boolean"),
                (
                    "style",
                    "'deepObject'|'form'|'label'|'matrix'|'pipeDelimited'|'simple'|'spaceDelimited'",
                ),
                ("explode", "boolean"),
                ("allowReserved", "boolean"),
                ("schema", "Schema|Reference"),
                ("example", "any"),
                ("examples", "Example|Reference{}"),
                ("content", "MediaType{}"),
            ]),
        ),
    );

    catalog.insert(
        "Path Item",
        both(
            VersionConfig::new().allows_extensions(true).properties(&[
                ("$ref", "string"),
                ("get", "Operation"),
                ("put", "Operation"),
                ("post", "Operation"),
                ("delete", "Operation"),
                ("options", "Operation"),
                ("head", "Operation"),
                ("patch", "Operation"),
                ("parameters", "Parameter[]"),
            ]),
            VersionConfig::new().allows_extensions(true).properties(&[
                ("$ref", "string"),
                ("summary", "string"),
                ("description", "string"),
                ("get", "Operation"),
                ("put", "Operation"),
                ("post", "Operation"),
                ("delete", "Operation"),
                ("options", "Operation"),
                ("head", "Operation"),
                ("patch", "Operation"),
                ("trace", "Operation"),
                ("servers", "Server[]"),
                ("parameters", "Parameter[]"),
            ]),
        ),
    );

    catalog.insert(
        "Paths",
        both(
            VersionConfig::new()
                .allows_extensions(true)
                .additional_properties("Path")
                .key_pattern("`/${string}`"),
            VersionConfig::new()
                .allows_extensions(true)
                .additional_properties("Path")
                .key_pattern("`/${string}`"),
        ),
    );

    catalog.insert(
        "Reference",
        both(
            VersionConfig::new()
                .allows_extensions(false)
                .property("$ref", "string!"),
            VersionConfig::new()
                .allows_extensions(false)
                .property("$ref", "string!"),
        ),
    );

    catalog.insert(
        "Request Body",
        v3_only(VersionConfig::new().allows_extensions(true).properties(&[
            ("description", "string"),
            ("content", "MediaType{}"),
            ("required", "boolean"),
        ])),
    );

    catalog.insert(
        "Response",
        v3_only(VersionConfig::new().allows_extensions(true).properties(&[
            ("description", "string!"),
            ("headers", "Header|Reference{}"),
            ("content", "MediaType{}"),
            ("links", "Link|Reference{}"),
        ])),
    );

    catalog.insert(
        "Responses",
        v3_only(
            VersionConfig::new()
                .allows_extensions(true)
                .additional_properties("Response|Reference")
                .key_pattern("number")
                .property("default", "Response|Reference"),
        ),
    );

    catalog.insert(
        "Schema",
        v3_only(VersionConfig::new().allows_extensions(true).properties(&[
            ("type", "string"),
            ("allOf", "Schema|Reference"),
            ("oneOf", "Schema|Reference"),
            ("anyOf", "Schema|Reference"),
            ("not", "Schema|Reference"),
            ("title", "string"),
            ("maximum", "number"),
            ("exclusiveMaximum", "number"),
            ("minimum", "number"),
            ("exclusiveMinimum", "number"),
            ("maxLength", "number"),
            ("minLength", "number"),
            ("pattern", "string"),
            ("maxItems", "number"),
            ("minItems", "number"),
            ("maxProperties", "number"),
            ("minProperties", "number"),
            ("uniqueItems", "boolean"),
            ("enum", "any[]"),
            ("multipleOf", "number"),
            ("requires", "string[]"),
            ("items", "Schema|Reference"),
            ("properties", "Schema|Reference{}"),
            ("additionalProperties", "Schema|Reference"),
            ("description", "string"),
            ("format", "string"),
            ("default", "any"),
            ("nullable", "boolean"),
            ("discriminator", "Discriminator"),
            ("readOnly", "boolean"),
            ("writeOnly", "boolean"),
            ("xml", "Xml"),
            ("externalDocs", "ExternalDocumentation"),
            ("example", "any"),
            ("deprecated", "boolean"),
        ])),
    );

    catalog.insert(
        "Security Requirement",
        v3_only(
            VersionConfig::new()
                .allows_extensions(false)
                .additional_properties("string[]"),
        ),
    );

    catalog.insert(
        "Security Scheme",
        v3_only(VersionConfig::new().allows_extensions(true).properties(&[
            ("type", "'apiKey'|'http'|'oauth2'|'openIdConnect'"),
            ("description", "string"),
            ("name", "string"),
            ("in", "'query'|'header'|'cookie'"),
            ("scheme", "string"),
            ("bearerFormat", "string"),
            ("flows", "OAuthFlows"),
            ("openIdConnectUrl", "string"),
        ])),
    );

    catalog.insert(
        "Server",
        v3_only(VersionConfig::new().allows_extensions(true).properties(&[
            ("url", "string!"),
            ("description", "string"),
            ("variables", "ServerVariable{}"),
        ])),
    );

    catalog.insert(
        "Server Variable",
        v3_only(VersionConfig::new().allows_extensions(true).properties(&[
            ("enum", "string[]"),
            ("default", "string!"),
            ("description", "string"),
        ])),
    );

    catalog.insert(
        "Tag",
        v3_only(VersionConfig::new().allows_extensions(true).properties(&[
            ("name", "string!"),
            ("description", "string"),
            ("externalDocs", "ExternalDocumentation"),
        ])),
    );

    catalog.insert(
        "Xml",
        v3_only(VersionConfig::new().allows_extensions(true).properties(&[
            ("name", "string"),
            ("namespace", "string"),
            ("prefix", "string"),
            ("attribute", "boolean"),
            ("wrapped", "boolean"),
        ])),
    );

    // Items (Header/Parameter v2) and Path (Paths) are referenced but
    // defined by hand in the target library, not generated; the validation
    // pass reports both as unknown references.

    catalog
}
