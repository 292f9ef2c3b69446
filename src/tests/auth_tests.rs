#[cfg(test)]
mod tests {
    use crate::auth::{create_jwt, verify_jwt};
    use crate::models::{User, UserRole};
    use chrono::Utc;
    use uuid::Uuid;

    fn create_test_user(role: UserRole) -> User {
        User {
            id: Uuid::new_v4(),
            username: "testuser".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "hashed_password".to_string(),
            role,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_create_jwt() {
        let user = create_test_user(UserRole::Editor);
        let token = create_jwt(&user, "test_secret").unwrap();
        assert!(!token.is_empty());
    }

    #[test]
    fn test_verify_jwt_carries_role() {
        let user = create_test_user(UserRole::Editor);
        let token = create_jwt(&user, "test_secret").unwrap();

        let claims = verify_jwt(&token, "test_secret").unwrap();
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.username, user.username);
        assert_eq!(claims.role, UserRole::Editor);
    }

    #[test]
    fn test_verify_jwt_invalid_secret() {
        let user = create_test_user(UserRole::Admin);
        let token = create_jwt(&user, "test_secret").unwrap();

        assert!(verify_jwt(&token, "wrong_secret").is_err());
    }

    #[test]
    fn test_verify_jwt_malformed_token() {
        assert!(verify_jwt("invalid.token.here", "test_secret").is_err());
        assert!(verify_jwt("", "test_secret").is_err());
    }

    #[test]
    fn test_role_string_round_trip() {
        for role in [UserRole::Admin, UserRole::Editor, UserRole::Viewer] {
            assert_eq!(UserRole::try_from(role.to_string()).unwrap(), role);
        }
        assert!(UserRole::try_from("superuser".to_string()).is_err());
    }
}
