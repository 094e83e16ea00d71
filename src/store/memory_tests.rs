use super::*;

async fn store_with_tree() -> (MemoryNodeStore, ContentNode, ContentNode, ContentNode) {
    let store = MemoryNodeStore::new();
    let root = ContentNode::new("root");
    let item = ContentNode::new("item").with_parent(root.id);
    let child = ContentNode::new("child").with_parent(item.id);
    store.save(&root).await.unwrap();
    store.save(&item).await.unwrap();
    store.save(&child).await.unwrap();
    (store, root, item, child)
}

#[tokio::test]
async fn test_save_links_new_node_into_parent() {
    let (store, root, item, child) = store_with_tree().await;
    let root = store.get_required(&root.id).await.unwrap();
    assert_eq!(root.children, vec![item.id]);
    let item = store.get_required(&item.id).await.unwrap();
    assert_eq!(item.children, vec![child.id]);
    assert_eq!(store.len().await, 3);
}

#[tokio::test]
async fn test_save_rejects_unknown_parent() {
    let store = MemoryNodeStore::new();
    let orphan = ContentNode::new("orphan").with_parent(NodeId::new());
    let err = store.save(&orphan).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_save_keeps_stored_children() {
    let (store, _root, item, child) = store_with_tree().await;
    let mut stale = item.clone();
    stale.children.clear();
    stale.name = "renamed".to_string();
    store.save(&stale).await.unwrap();

    let stored = store.get_required(&item.id).await.unwrap();
    assert_eq!(stored.name, "renamed");
    assert_eq!(stored.children, vec![child.id]);
}

#[tokio::test]
async fn test_move_node_updates_both_parents_and_copy() {
    let (store, root, mut item, _child) = store_with_tree().await;
    let other = ContentNode::new("other").with_parent(root.id);
    store.save(&other).await.unwrap();

    store.move_node(&mut item, &other.id).await.unwrap();

    assert_eq!(item.parent, Some(other.id));
    let root = store.get_required(&root.id).await.unwrap();
    assert_eq!(root.children, vec![other.id]);
    let other = store.get_required(&other.id).await.unwrap();
    assert_eq!(other.children, vec![item.id]);
    let stored = store.get_required(&item.id).await.unwrap();
    assert_eq!(stored.parent, Some(other.id));
}

#[tokio::test]
async fn test_move_node_under_own_descendant_fails() {
    let (store, _root, mut item, child) = store_with_tree().await;
    let err = store.move_node(&mut item, &child.id).await.unwrap_err();
    assert!(matches!(err, StoreError::InvalidMove { .. }));
    assert_eq!(item.parent, store.get_required(&item.id).await.unwrap().parent);
}

#[tokio::test]
async fn test_move_node_to_missing_parent_fails() {
    let (store, _root, mut item, _child) = store_with_tree().await;
    let missing = NodeId::new();
    let err = store.move_node(&mut item, &missing).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == missing));
}

#[tokio::test]
async fn test_delete_removes_subtree() {
    let (store, root, item, child) = store_with_tree().await;
    store.delete(&item.id).await.unwrap();

    assert!(store.get(&item.id).await.unwrap().is_none());
    assert!(store.get(&child.id).await.unwrap().is_none());
    let root = store.get_required(&root.id).await.unwrap();
    assert!(root.children.is_empty());
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_children_of_returns_ordered_children() {
    let store = MemoryNodeStore::new();
    let root = ContentNode::new("root");
    store.save(&root).await.unwrap();
    let first = ContentNode::new("first").with_parent(root.id);
    let second = ContentNode::new("second").with_parent(root.id);
    store.save(&first).await.unwrap();
    store.save(&second).await.unwrap();

    let root = store.get_required(&root.id).await.unwrap();
    let names: Vec<String> = store
        .children_of(&root)
        .await
        .unwrap()
        .into_iter()
        .map(|node| node.name)
        .collect();
    assert_eq!(names, vec!["first", "second"]);
}
