pub struct ReadingSplitPrompt;

impl ReadingSplitPrompt {
    pub fn get_schema() -> &'static str {
        r#"{
            "type": "object",
            "properties": {
                "sentences": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "en": { "type": "string" },
                            "cn": { "type": "string" }
                        },
                        "required": ["en", "cn"]
                    }
                }
            },
            "required": ["sentences"]
        }"#
    }

    pub fn get_prompt() -> &'static str {
        r#"你是一个专业的英语领读助教。请将用户输入的英语文本按意群或句子进行智能拆分，并为每一句提供地道的中文翻译。

拆分规则： 遇到长难句时，请按照语意节奏拆分成更短的单元，方便朗读。

返回格式： 必须是严格的 JSON 对象： { "sentences": [ { "en": "英文内容", "cn": "中文翻译" }, ... ] }"#
    }
}
