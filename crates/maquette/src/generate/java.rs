//! Java skeleton backend.

use maquette_core::model::{Access, Class, Relation};

use super::{capitalize, parent_of};

/// Modifier keyword with trailing space. Package visibility has no keyword
/// in Java, so it contributes nothing to the declaration.
fn modifier(access: Access) -> &'static str {
    match access {
        Access::Public => "public ",
        Access::Private => "private ",
        Access::Protected => "protected ",
        Access::Package => "",
    }
}

pub(crate) fn generate(classes: &[Class], relations: &[Relation]) -> String {
    let mut code = String::new();

    for class in classes {
        code.push_str(&format!("public class {}", class.name()));
        if let Some(parent) = parent_of(class, classes, relations) {
            code.push_str(&format!(" extends {}", parent.name()));
        }
        code.push_str(" {\n\n");

        for attribute in class.attributes() {
            code.push_str(&format!(
                "    {}{} {};\n",
                modifier(attribute.access),
                attribute.ty,
                attribute.name
            ));
        }
        code.push('\n');

        code.push_str(&format!("    public {}() {{\n    }}\n\n", class.name()));

        for attribute in class.attributes() {
            code.push_str(&format!(
                "    public {} get{}() {{\n",
                attribute.ty,
                capitalize(&attribute.name)
            ));
            code.push_str(&format!("        return this.{};\n", attribute.name));
            code.push_str("    }\n\n");

            code.push_str(&format!(
                "    public void set{}({} {}) {{\n",
                capitalize(&attribute.name),
                attribute.ty,
                attribute.name
            ));
            code.push_str(&format!(
                "        this.{} = {};\n",
                attribute.name, attribute.name
            ));
            code.push_str("    }\n\n");
        }

        for method in class.methods() {
            code.push_str(&format!(
                "    {}{} {}() {{\n",
                modifier(method.access),
                method.return_type,
                method.name
            ));
            code.push_str("        // TODO: Implement method\n");
            code.push_str("    }\n\n");
        }

        code.push_str("}\n\n");
    }

    code
}
