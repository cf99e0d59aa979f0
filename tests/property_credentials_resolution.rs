//! Property tests for credentials resolution

use proptest::prelude::*;
use std::sync::Arc;
use task_credentials::{
    CredentialsService, ErrorCode, IamRoleCredentials, InMemoryCredentialsManager,
    TaskCredentials,
};

const PREFIX: &str = "CredentialsV1Request: ";

fn role_credentials() -> impl Strategy<Value = IamRoleCredentials> {
    (
        ".{0,40}",
        "[A-Z0-9]{0,20}",
        ".{0,40}",
        ".{0,60}",
        ".{0,25}",
        prop_oneof![
            Just("TaskApplication".to_string()),
            Just("TaskExecution".to_string()),
            ".{0,12}",
        ],
    )
        .prop_map(
            |(role_arn, access_key_id, secret_access_key, session_token, expiration, role_type)| {
                IamRoleCredentials {
                    role_arn,
                    access_key_id,
                    secret_access_key,
                    session_token,
                    expiration,
                    role_type,
                }
            },
        )
}

fn service_with(id: &str, credentials: TaskCredentials) -> CredentialsService {
    let store = InMemoryCredentialsManager::new();
    store.set_task_credentials(id, credentials).unwrap();
    CredentialsService::new(Arc::new(store))
}

proptest! {
    #[test]
    fn prop_success_body_is_exactly_the_role_credentials(
        id in "[a-z0-9-]{1,36}",
        arn in "arn:aws:ecs:[a-z0-9-]{1,12}:[0-9]{12}:task/[a-z0-9]{1,32}",
        creds in role_credentials(),
    ) {
        let service = service_with(&id, TaskCredentials::new(arn.clone(), creds.clone()));
        let resolution = service.resolve(&id, PREFIX);

        prop_assert_eq!(&resolution.arn, &arn);
        prop_assert_eq!(resolution.role_type.as_deref(), Some(creds.role_type.as_str()));

        let payload = resolution.outcome.expect("initialized credentials resolve");
        let decoded: IamRoleCredentials = serde_json::from_slice(&payload).unwrap();
        prop_assert_eq!(decoded, creds);
    }

    #[test]
    fn prop_resolution_is_idempotent(
        id in "[a-z0-9-]{0,36}",
        stored_id in "[a-z0-9-]{1,36}",
        arn in "(arn:aws:ecs:task/[a-z0-9]{1,8})?",
        creds in prop_oneof![Just(IamRoleCredentials::default()), role_credentials()],
    ) {
        let service = service_with(&stored_id, TaskCredentials::new(arn, creds));

        let first = service.resolve(&id, PREFIX);
        let second = service.resolve(&id, PREFIX);

        prop_assert_eq!(&first.arn, &second.arn);
        prop_assert_eq!(&first.role_type, &second.role_type);
        match (first.outcome, second.outcome) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(a), Err(b)) => {
                prop_assert_eq!(a.code(), b.code());
                prop_assert_eq!(a.error_message(), b.error_message());
            }
            _ => prop_assert!(false, "classification changed between identical requests"),
        }
    }

    #[test]
    fn prop_unknown_identifiers_are_rejected(
        id in "[a-z0-9-]{1,36}",
        creds in role_credentials(),
    ) {
        let service = service_with("stored-id", TaskCredentials::new("arn:aws:ecs:task/1", creds));
        prop_assume!(id != "stored-id");

        let resolution = service.resolve(&id, PREFIX);
        let err = resolution.outcome.expect_err("unknown identifier");
        prop_assert_eq!(err.code(), ErrorCode::InvalidIdInRequest);
        prop_assert!(resolution.arn.is_empty());
    }
}
