use std::sync::Arc;

use async_trait::async_trait;
use storefront_actor::{Collection, CollectionActor, FrameworkError};

// --- Test Collection ---

#[derive(Clone, Debug, PartialEq)]
struct Tag {
    code: u32,
    label: String,
}

#[derive(Debug)]
struct TagCreate {
    code: u32,
    label: String,
}

#[derive(Debug, thiserror::Error)]
#[error("Tag code 0 is reserved")]
struct ReservedCode;

#[derive(Debug)]
struct Tags;

#[async_trait]
impl Collection for Tags {
    type Item = Arc<Tag>;
    type Key = u32;
    type Append = TagCreate;
    type Context = ();
    type Error = ReservedCode;

    fn key_of(item: &Arc<Tag>) -> &u32 {
        &item.code
    }

    // Blank labels are declined, code 0 is rejected.
    async fn admit(params: TagCreate, _ctx: &()) -> Result<Option<Arc<Tag>>, ReservedCode> {
        if params.code == 0 {
            return Err(ReservedCode);
        }
        if params.label.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(Arc::new(Tag {
            code: params.code,
            label: params.label,
        })))
    }
}

fn tag(code: u32, label: &str) -> TagCreate {
    TagCreate {
        code,
        label: label.to_string(),
    }
}

// --- Tests ---

#[tokio::test]
async fn test_collection_full_lifecycle() {
    let (actor, client) = CollectionActor::<Tags>::new(10);
    let handle = tokio::spawn(actor.run(()));

    // 1. Append keeps insertion order
    let first = client.append(tag(3, "red")).await.unwrap().unwrap();
    assert_eq!(first.label, "red");
    client.append(tag(1, "green")).await.unwrap();
    client.append(tag(3, "blue")).await.unwrap();

    let labels: Vec<String> = client
        .list()
        .await
        .unwrap()
        .iter()
        .map(|t| t.label.clone())
        .collect();
    assert_eq!(labels, vec!["red", "green", "blue"]);

    // 2. Find returns the first match by insertion order
    let found = client.find(3).await.unwrap().unwrap();
    assert_eq!(found.label, "red");
    assert!(Arc::ptr_eq(&found, &first));
    assert!(client.find(42).await.unwrap().is_none());

    // 3. Declined append changes nothing
    let declined = client.append(tag(9, "  ")).await.unwrap();
    assert!(declined.is_none());
    assert_eq!(client.list().await.unwrap().len(), 3);

    // 4. Rejected append surfaces the admission error and changes nothing
    let rejected = client.append(tag(0, "zero")).await;
    match rejected {
        Err(FrameworkError::Rejected(e)) => assert!(e.to_string().contains("reserved")),
        other => panic!("Expected Rejected, got {:?}", other),
    }
    assert_eq!(client.list().await.unwrap().len(), 3);

    // 5. AppendAndList returns the contents right after the append
    let contents = client.append_and_list(tag(5, "black")).await.unwrap();
    assert_eq!(contents.len(), 4);
    assert_eq!(contents[3].label, "black");

    let unchanged = client.append_and_list(tag(6, "")).await.unwrap();
    assert_eq!(unchanged.len(), 4);

    // 6. Dropping the last client stops the actor
    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_concurrent_appends_are_serialized() {
    let (actor, client) = CollectionActor::<Tags>::new(4);
    tokio::spawn(actor.run(()));

    let mut handles = vec![];
    for code in 1..=50u32 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.append(tag(code, "tag")).await
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap().unwrap().is_some());
    }

    let items = client.list().await.unwrap();
    assert_eq!(items.len(), 50);

    let mut codes: Vec<u32> = items.iter().map(|t| t.code).collect();
    codes.sort_unstable();
    assert_eq!(codes, (1..=50).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_closed_actor_reports_actor_closed() {
    let (actor, client) = CollectionActor::<Tags>::new(1);
    drop(actor);

    let result = client.list().await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}
