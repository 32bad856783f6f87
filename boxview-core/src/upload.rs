//! Paste-to-upload flow, independent of the browser clipboard API.

use crate::clipboard::is_image_media_type;
use crate::error::ViewerError;
use std::future::Future;

/// One item of a paste event's clipboard data.
pub trait ClipboardEntry {
    type File;

    /// Media type as reported by the clipboard (e.g. `image/png`).
    fn media_type(&self) -> String;

    /// The item's content as a file, if it has one.
    fn file(&self) -> Option<Self::File>;
}

/// Upload every image item in clipboard order, one request at a time.
///
/// Non-image items are skipped without a request. Failed uploads are logged
/// and do not stop the remaining items. Returns one result per attempted upload.
pub async fn upload_each_image<E, I, F, Fut, T>(items: I, mut upload: F) -> Vec<Result<T, ViewerError>>
where
    E: ClipboardEntry,
    I: IntoIterator<Item = E>,
    F: FnMut(E::File) -> Fut,
    Fut: Future<Output = Result<T, ViewerError>>,
{
    let mut results = Vec::new();

    for item in items {
        let media_type = item.media_type();
        if !is_image_media_type(&media_type) {
            continue;
        }

        let Some(file) = item.file() else {
            log::warn!("Clipboard item of type {} has no file", media_type);
            continue;
        };

        let result = upload(file).await;
        if let Err(e) = &result {
            log::error!("Error uploading the pasted image: {}", e);
        }
        results.push(result);
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct FakeItem {
        media_type: &'static str,
        file: Option<&'static str>,
    }

    impl ClipboardEntry for FakeItem {
        type File = &'static str;

        fn media_type(&self) -> String {
            self.media_type.to_string()
        }

        fn file(&self) -> Option<&'static str> {
            self.file
        }
    }

    fn item(media_type: &'static str, file: &'static str) -> FakeItem {
        FakeItem {
            media_type,
            file: Some(file),
        }
    }

    #[test]
    fn text_item_issues_no_upload() {
        let sent = RefCell::new(Vec::new());

        let results = block_on(upload_each_image(vec![item("text/plain", "hello")], |file| {
            sent.borrow_mut().push(file);
            async { Ok(()) }
        }));

        assert!(results.is_empty());
        assert!(sent.borrow().is_empty());
    }

    #[test]
    fn each_image_uploaded_in_order() {
        let sent = RefCell::new(Vec::new());
        let items = vec![
            item("image/png", "first.png"),
            item("text/html", "<b>x</b>"),
            item("image/jpeg", "second.jpg"),
        ];

        let results = block_on(upload_each_image(items, |file| {
            sent.borrow_mut().push(file);
            async move { Ok(file.len()) }
        }));

        assert_eq!(*sent.borrow(), vec!["first.png", "second.jpg"]);
        assert_eq!(results, vec![Ok(9), Ok(10)]);
    }

    #[test]
    fn failure_does_not_stop_later_items() {
        let sent = RefCell::new(Vec::new());
        let items = vec![item("image/png", "bad.png"), item("image/png", "good.png")];

        let results = block_on(upload_each_image(items, |file| {
            sent.borrow_mut().push(file);
            async move {
                if file == "bad.png" {
                    Err(ViewerError::Transport("connection reset".to_string()))
                } else {
                    Ok(())
                }
            }
        }));

        assert_eq!(sent.borrow().len(), 2);
        assert!(results[0].is_err());
        assert!(results[1].is_ok());
    }

    #[test]
    fn image_item_without_file_is_skipped() {
        let items = vec![FakeItem {
            media_type: "image/png",
            file: None,
        }];

        let results = block_on(upload_each_image(items, |_file: &'static str| async { Ok(()) }));

        assert!(results.is_empty());
    }
}
