use boost_export::boost_service::boost_models::{DocumentNode, FolderNode};

/// Create a test FolderNode
pub fn create_test_folder(id: &str, pathname: &str, docs: &[&str], children: &[&str]) -> FolderNode {
    FolderNode {
        id: id.to_string(),
        pathname: pathname.to_string(),
        child_doc_ids: docs.iter().map(|d| d.to_string()).collect(),
        child_folder_ids: children.iter().map(|c| c.to_string()).collect(),
    }
}

/// Create a test DocumentNode
pub fn create_test_doc(id: &str, title: &str, content: &str) -> DocumentNode {
    DocumentNode {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
    }
}
