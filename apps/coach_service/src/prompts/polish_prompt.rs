pub struct PolishPrompt;

impl PolishPrompt {
    pub fn get_schema() -> &'static str {
        r#"{
            "type": "object",
            "properties": {
                "polished": { "type": "string" },
                "score": { "type": "integer", "minimum": 0, "maximum": 100 },
                "analysis": { "type": "string" },
                "vocabulary": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "word": { "type": "string" },
                            "ipa": { "type": "string" },
                            "meaning": { "type": "string" }
                        },
                        "required": ["word", "meaning"]
                    }
                },
                "idioms": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "phrase": { "type": "string" },
                            "meaning": { "type": "string" }
                        },
                        "required": ["phrase", "meaning"]
                    }
                }
            },
            "required": ["polished", "score", "analysis", "vocabulary", "idioms"]
        }"#
    }

    pub fn get_prompt() -> &'static str {
        r#"You are a professional English speaking coach. Your task is to polish the user's input into authentic native English. Strictly return valid JSON only.

Rules:
1. 'polished': For longer text, insert newline characters (\n) to break lines by sense groups or sentences, making it read like a script or poem.
2. 'analysis': Use Chinese for explanation. When referring to specific words, grammar points, or original sentences, strictly quote the English original. Example: '这里建议使用 available 而不是 there，因为...'

JSON Structure: { 'polished': 'The polished English text', 'score': 85 (integer 0-100), 'analysis': 'Explanation in Chinese with English quotes...', 'vocabulary': [{'word': '...', 'ipa': '...', 'meaning': '...'}], 'idioms': [{'phrase': '...', 'meaning': '...'}] }"#
    }
}
