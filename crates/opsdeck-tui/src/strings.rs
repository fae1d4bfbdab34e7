//! Minimal interface-string lookup for the persisted language preference.
//!
//! Only the troubleshoot dialog chrome is translated; everything else in the
//! console is fixture copy and stays in English. Unknown languages and keys
//! fall back to English.

pub fn lookup(lang: &str, key: &str) -> &'static str {
    match lang {
        "es" => lookup_es(key).unwrap_or_else(|| lookup_en(key)),
        "hi" => lookup_hi(key).unwrap_or_else(|| lookup_en(key)),
        _ => lookup_en(key),
    }
}

fn lookup_en(key: &str) -> &'static str {
    match key {
        "troubleshoot.title" => "Troubleshoot",
        "troubleshoot.description" => "Choose how to recover this failed step",
        "troubleshoot.ai_retry" => "AI Retry",
        "troubleshoot.ai_retry_desc" => "Let the assistant re-run the step automatically",
        "troubleshoot.manual_edit" => "Manual Edit",
        "troubleshoot.manual_edit_desc" => "Open the step configuration for editing",
        "troubleshoot.prompt_fix" => "Prompt Fix",
        "troubleshoot.prompt_fix_desc" => "Describe the fix in natural language",
        _ => "",
    }
}

fn lookup_es(key: &str) -> Option<&'static str> {
    Some(match key {
        "troubleshoot.title" => "Solucionar",
        "troubleshoot.description" => "Elige como recuperar este paso fallido",
        "troubleshoot.ai_retry" => "Reintento IA",
        "troubleshoot.ai_retry_desc" => "Deja que el asistente repita el paso",
        "troubleshoot.manual_edit" => "Edicion manual",
        "troubleshoot.manual_edit_desc" => "Abre la configuracion del paso",
        "troubleshoot.prompt_fix" => "Arreglo por prompt",
        "troubleshoot.prompt_fix_desc" => "Describe el arreglo en lenguaje natural",
        _ => return None,
    })
}

fn lookup_hi(key: &str) -> Option<&'static str> {
    Some(match key {
        "troubleshoot.title" => "समस्या निवारण",
        "troubleshoot.ai_retry" => "AI पुनः प्रयास",
        "troubleshoot.manual_edit" => "मैनुअल संपादन",
        "troubleshoot.prompt_fix" => "प्रॉम्प्ट सुधार",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_is_the_default() {
        assert_eq!(lookup("en", "troubleshoot.title"), "Troubleshoot");
        assert_eq!(lookup("fr", "troubleshoot.title"), "Troubleshoot");
    }

    #[test]
    fn translated_keys_differ() {
        assert_eq!(lookup("es", "troubleshoot.title"), "Solucionar");
        assert_ne!(lookup("hi", "troubleshoot.title"), lookup("en", "troubleshoot.title"));
    }

    #[test]
    fn missing_translation_falls_back() {
        // hi has no description entry, so the English one is used.
        assert_eq!(
            lookup("hi", "troubleshoot.description"),
            lookup("en", "troubleshoot.description")
        );
    }
}
