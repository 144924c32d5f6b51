//! PHP skeleton backend.

use maquette_core::model::{Access, Class, Relation};

use super::{capitalize, parent_of};

/// PHP has no package visibility; it widens to `public`.
fn visibility(access: Access) -> &'static str {
    match access {
        Access::Public | Access::Package => "public",
        Access::Private => "private",
        Access::Protected => "protected",
    }
}

pub(crate) fn generate(classes: &[Class], relations: &[Relation]) -> String {
    let mut code = String::from("<?php\n\n");

    for class in classes {
        code.push_str(&format!("class {}", class.name()));
        if let Some(parent) = parent_of(class, classes, relations) {
            code.push_str(&format!(" extends {}", parent.name()));
        }
        code.push_str(" {\n\n");

        for attribute in class.attributes() {
            code.push_str(&format!(
                "    {} ${};\n",
                visibility(attribute.access),
                attribute.name
            ));
        }
        code.push('\n');

        code.push_str("    public function __construct() {\n    }\n\n");

        for attribute in class.attributes() {
            code.push_str(&format!(
                "    public function get{}() {{\n",
                capitalize(&attribute.name)
            ));
            code.push_str(&format!("        return $this->{};\n", attribute.name));
            code.push_str("    }\n\n");

            code.push_str(&format!(
                "    public function set{}(${}) {{\n",
                capitalize(&attribute.name),
                attribute.name
            ));
            code.push_str(&format!(
                "        $this->{} = ${};\n",
                attribute.name, attribute.name
            ));
            code.push_str("    }\n\n");
        }

        for method in class.methods() {
            code.push_str(&format!(
                "    {} function {}() {{\n",
                visibility(method.access),
                method.name
            ));
            code.push_str("        // TODO: Implement method\n");
            code.push_str("    }\n\n");
        }

        code.push_str("}\n\n");
    }

    code
}
