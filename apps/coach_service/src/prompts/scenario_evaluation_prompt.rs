pub struct ScenarioEvaluationPrompt;

impl ScenarioEvaluationPrompt {
    pub fn get_schema() -> &'static str {
        r#"{
            "type": "object",
            "properties": {
                "score": { "type": "integer", "minimum": 0, "maximum": 100 },
                "feedback": { "type": "string" },
                "improvements": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "original": { "type": "string" },
                            "better": { "type": "string" },
                            "reason": { "type": "string" }
                        },
                        "required": ["original", "better", "reason"]
                    }
                }
            },
            "required": ["score", "feedback", "improvements"]
        }"#
    }

    pub fn get_prompt(scenario_title: &str) -> String {
        format!(
            r#"You are an expert English teacher evaluating a student's performance in a role-play scenario: "{}".

Task:
Analyze the student's inputs (marked as 'user') against the expected standard (marked as 'standard').

Return Valid JSON:
{{
  "score": 85, // Overall integer score (0-100)
  "feedback": "General feedback in Chinese...",
  "improvements": [
    {{
      "original": "User's mistake",
      "better": "Better expression",
      "reason": "Explanation in Chinese"
    }}
  ]
}}"#,
            scenario_title
        )
    }
}
