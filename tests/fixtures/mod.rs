#![allow(dead_code)]

use serde_json::{Value, json};

pub fn sample_chat_request() -> Value {
    json!({
        "subject": "Matemática",
        "question": "Explique números primos",
        "history": []
    })
}

pub fn sample_chat_with_history() -> Value {
    json!({
        "subject": "Física",
        "question": "Explique velocidade",
        "context": "cinemática",
        "history": [
            {"role": "user", "content": "O que é movimento?"},
            {"role": "assistant", "content": "Movimento é..."}
        ]
    })
}

pub fn sample_gemini_response(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP",
            "index": 0
        }],
        "usageMetadata": {
            "promptTokenCount": 120,
            "candidatesTokenCount": 40,
            "totalTokenCount": 160
        }
    })
}

pub fn sample_claude_response(text: &str) -> Value {
    json!({
        "id": "msg_test_1",
        "type": "message",
        "role": "assistant",
        "model": "claude-sonnet-4-5",
        "content": [{"type": "text", "text": text}],
        "stop_reason": "end_turn",
        "usage": {"input_tokens": 120, "output_tokens": 40}
    })
}
