use serde_json::Value;
use std::collections::BTreeMap;

/// Serializa un `Value` de JSON a su representación canónica:
/// - Objetos con claves ordenadas byte a byte (ascendente)
/// - Sin espacios ni saltos de línea
/// - Escapes de strings delegados a `serde_json` (estables entre versiones)
///
/// Dos registros lógicamente iguales producen exactamente los mismos bytes,
/// sin importar el orden de inserción de sus campos.
pub fn to_canonical_json(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        // Los campos numéricos del subconjunto canónico se validan como
        // enteros antes de llegar acá; un Number entero serializa sin `.0`.
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => {
            // to_string sobre &str nunca falla
            out.push_str(&serde_json::to_string(s).unwrap_or_default());
        }
        Value::Array(arr) => {
            out.push('[');
            for (i, item) in arr.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let ordered: BTreeMap<&String, &Value> = map.iter().collect();
            out.push('{');
            for (i, (k, v)) in ordered.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&serde_json::to_string(k).unwrap_or_default());
                out.push(':');
                write_canonical(v, out);
            }
            out.push('}');
        }
    }
}
