#![allow(clippy::unwrap_used, clippy::expect_used)]

//! The in-process client speaks SDK types only.

mod support;

use friends_directory::{DirectoryError, ErrorKind, NewUser, UserPatch};
use support::TestContext;

#[tokio::test]
async fn client_covers_every_operation() {
    let ctx = TestContext::new().await;
    let client = ctx.module.client();

    let alice = client
        .create_user(NewUser::new("Alice", "Smith", "a@x.com"))
        .await
        .unwrap();
    let bob = client
        .create_user(NewUser::new("Bob", "Jones", "b@x.com"))
        .await
        .unwrap();

    assert_eq!(client.get_user(alice.id).await.unwrap(), alice);
    assert_eq!(client.list_users().await.unwrap().len(), 2);

    let renamed = client
        .update_user(bob.id, UserPatch::default().with_name("Robert"))
        .await
        .unwrap();
    assert_eq!(renamed.name, "Robert");

    let edge = client.add_friend(alice.id, bob.id).await.unwrap();
    assert_eq!(edge.accepter_id, bob.id);
    assert_eq!(
        client.list_friends(alice.id).await.unwrap(),
        vec![renamed.clone()]
    );

    client.remove_friend(alice.id, bob.id).await.unwrap();
    client.delete_user(bob.id).await.unwrap();
    assert_eq!(client.list_users().await.unwrap(), vec![alice]);
}

#[tokio::test]
async fn domain_errors_become_sdk_errors() {
    let ctx = TestContext::new().await;
    let client = ctx.module.client();
    let (alice, _) = ctx.alice_and_bob().await;

    let err = client.get_user(100).await.unwrap_err();
    assert!(matches!(err, DirectoryError::NotFound { .. }));

    let err = client.add_friend(alice, alice).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let err = client
        .create_user(NewUser::new("Dup", "Dup", "a@x.com"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    assert!(err.to_string().contains("a@x.com"));
}
