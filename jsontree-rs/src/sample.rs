//! The reference document printed by the `sample` command.

use crate::json::{JsonArray, JsonObject, JsonValue};

/// Build the reference document.
///
/// One entry per variant, plus a nested object and a nested array:
/// `{a:"s1",b:1.1,c:true,d:false,e:null,h:{f:"s2",g:2.2,},i:["s3",3.3,],}`
/// (entry order varies between runs).
pub fn reference_document() -> JsonValue {
    let mut root = JsonObject::new();
    root.add("a", "s1");
    root.add("b", 1.1);
    root.add("c", true);
    root.add("d", false);
    root.add("e", JsonValue::Null);

    let mut obj = JsonObject::new();
    obj.add("f", "s2");
    obj.add("g", 2.2);
    root.add("h", obj);

    let mut arr = JsonArray::new();
    arr.add("s3");
    arr.add(3.3);
    root.add("i", arr);

    JsonValue::Object(root)
}
