use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateUsernameRequest {
    pub username: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateAvatarColorRequest {
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_username_request_serialization() {
        let request = UpdateUsernameRequest {
            username: "baller42".to_string(),
        };

        let serialized = serde_json::to_string(&request).unwrap();
        assert!(serialized.contains("baller42"));

        let deserialized: UpdateUsernameRequest = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized.username, request.username);
    }

    #[test]
    fn test_update_avatar_color_request_serialization() {
        let request = UpdateAvatarColorRequest {
            color: "#00d4ff".to_string(),
        };

        let serialized = serde_json::to_string(&request).unwrap();
        let deserialized: UpdateAvatarColorRequest = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized.color, "#00d4ff");
    }
}
