//! Python skeleton backend.
//!
//! Access modifiers do not exist in Python and are ignored; every attribute
//! becomes an `__init__` field plus a `@property` accessor pair.

use maquette_core::model::{Class, Relation};

use super::parent_of;

pub(crate) fn generate(classes: &[Class], relations: &[Relation]) -> String {
    let mut code = String::new();

    for class in classes {
        code.push_str(&format!("class {}", class.name()));
        if let Some(parent) = parent_of(class, classes, relations) {
            code.push_str(&format!("({})", parent.name()));
        }
        code.push_str(":\n");

        code.push_str("    def __init__(self):\n");
        if class.attributes().is_empty() {
            code.push_str("        pass\n");
        } else {
            for attribute in class.attributes() {
                code.push_str(&format!(
                    "        self.{} = None  # {}\n",
                    attribute.name, attribute.ty
                ));
            }
        }
        code.push('\n');

        for attribute in class.attributes() {
            code.push_str("    @property\n");
            code.push_str(&format!("    def {}(self):\n", attribute.name));
            code.push_str(&format!("        return self._{}\n\n", attribute.name));

            code.push_str(&format!("    @{}.setter\n", attribute.name));
            code.push_str(&format!("    def {}(self, value):\n", attribute.name));
            code.push_str(&format!("        self._{} = value\n\n", attribute.name));
        }

        for method in class.methods() {
            code.push_str(&format!("    def {}(self):\n", method.name));
            code.push_str("        # TODO: Implement method\n");
            code.push_str("        pass\n\n");
        }

        code.push('\n');
    }

    code
}
