use serde_json::json;

use crate::ConfigParams;

/// Convert config params to a natural language request for the model.
pub fn config_generation(params: &ConfigParams) -> String {
    let mut out = String::with_capacity(512);

    out.push_str("Generate a tauri.conf.json configuration based on these requirements:\n");
    out.push_str("- App Name: ");
    out.push_str(&params.app_name);
    out.push_str("\n- Window Title: ");
    out.push_str(&params.window_title);
    out.push_str("\n- Identifier: ");
    out.push_str(&params.identifier);
    out.push_str("\n- Initial Size: ");
    out.push_str(&format!("{}x{}", params.width, params.height));
    out.push_str("\n- Resizable: ");
    out.push_str(&params.resizable.to_string());
    out.push_str("\n- Fullscreen: ");
    out.push_str(&params.fullscreen.to_string());
    out.push_str("\n- Security Relaxed: ");
    out.push_str(&params.security_relaxed.to_string());
    out.push_str("\n\nReturn ONLY the raw JSON content, no markdown formatting.");

    out
}

pub fn node_explanation(label: &str) -> String {
    format!(
        "Explain the role of \"{}\" in the context of Tauri Architecture briefly (max 2 sentences).",
        label
    )
}

/// Response schema for structured config generation. Field names and nesting
/// mirror the tauri.conf.json shape the flow renders.
pub fn config_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "package": {
                "type": "OBJECT",
                "properties": {
                    "productName": { "type": "STRING" },
                    "version": { "type": "STRING" }
                }
            },
            "tauri": {
                "type": "OBJECT",
                "properties": {
                    "bundle": {
                        "type": "OBJECT",
                        "properties": {
                            "identifier": { "type": "STRING" }
                        }
                    },
                    "windows": {
                        "type": "ARRAY",
                        "items": {
                            "type": "OBJECT",
                            "properties": {
                                "title": { "type": "STRING" },
                                "width": { "type": "NUMBER" },
                                "height": { "type": "NUMBER" },
                                "resizable": { "type": "BOOLEAN" },
                                "fullscreen": { "type": "BOOLEAN" }
                            }
                        }
                    },
                    "security": {
                        "type": "OBJECT",
                        "properties": {
                            "csp": { "type": "STRING", "nullable": true }
                        }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod test {
    use crate::ConfigParams;

    #[test]
    fn config_generation_lists_every_param() {
        let params = ConfigParams {
            app_name: "demo".to_string(),
            window_title: "Demo".to_string(),
            identifier: "com.x.demo".to_string(),
            width: 800,
            height: 600,
            fullscreen: false,
            resizable: true,
            security_relaxed: false,
        };

        let prompt = super::config_generation(&params);

        assert!(prompt.contains("App Name: demo"));
        assert!(prompt.contains("Identifier: com.x.demo"));
        assert!(prompt.contains("Initial Size: 800x600"));
        assert!(prompt.contains("Resizable: true"));
        assert!(prompt.contains("Fullscreen: false"));
        assert!(prompt.contains("raw JSON content"));
    }

    #[test]
    fn node_explanation_embeds_label() {
        let prompt = super::node_explanation("IPC Bridge");

        assert!(prompt.contains("\"IPC Bridge\""));
    }
}
