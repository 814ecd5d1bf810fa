use serde::{Deserialize, Serialize};

/// FolderNode: a remote folder as returned by the folders endpoints.
/// `pathname` positions the folder in the remote tree and drives the local
/// directory layout.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FolderNode {
    pub id: String,
    pub pathname: String,
    #[serde(rename = "childDocsIds", alias = "childDocIds")]
    pub child_doc_ids: Vec<String>,
    #[serde(rename = "childFoldersIds", alias = "childFolderIds")]
    pub child_folder_ids: Vec<String>,
}

/// DocumentNode: a remote document flattened from the `doc.head` payload.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentNode {
    pub id: String,
    pub title: String,
    pub content: String,
}

/// Envelope of `GET /folders`.
#[derive(Debug, Serialize, Deserialize)]
pub struct FolderListResponse {
    pub folders: Vec<FolderNode>,
}

/// Envelope of `GET /folders/{id}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct FolderResponse {
    pub folder: FolderNode,
}

/// Envelope of `GET /docs/{id}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct DocResponse {
    pub doc: DocPayload,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DocPayload {
    pub head: DocHead,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DocHead {
    pub title: String,
    pub content: String,
}

impl DocResponse {
    pub fn into_document(self, id: &str) -> DocumentNode {
        DocumentNode {
            id: id.to_string(),
            title: self.doc.head.title,
            content: self.doc.head.content,
        }
    }
}
