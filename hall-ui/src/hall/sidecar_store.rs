use hall_types::SidecarPayload;

/// Payloads open in the side panel and the active-tab cursor.
///
/// Tab order is insertion order. `active_tab` always indexes into `payloads`
/// while the list is non-empty; when empty it is 0 and unused.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SidecarStore {
    payloads: Vec<SidecarPayload>,
    active_tab: usize,
}

impl SidecarStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn payloads(&self) -> &[SidecarPayload] {
        &self.payloads
    }

    pub fn active_tab(&self) -> usize {
        self.active_tab
    }

    pub fn len(&self) -> usize {
        self.payloads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }

    pub fn active_payload(&self) -> Option<&SidecarPayload> {
        self.payloads.get(self.active_tab)
    }

    /// Open a payload, replacing any entry with the same `(type, messageId)`
    /// in place. The pushed or updated entry becomes active.
    pub fn push(&mut self, payload: SidecarPayload) {
        let existing = self
            .payloads
            .iter()
            .position(|p| p.identity() == payload.identity());

        match existing {
            Some(index) => {
                self.payloads[index] = payload;
                self.active_tab = index;
            }
            None => {
                self.payloads.push(payload);
                self.active_tab = self.payloads.len() - 1;
            }
        }
    }

    /// Close the tab at `index`. Out-of-range indexes are ignored.
    pub fn close(&mut self, index: usize) {
        if index >= self.payloads.len() {
            return;
        }
        self.payloads.remove(index);

        let mut next = self.active_tab;
        if next >= index && next > 0 {
            next -= 1;
        }
        self.active_tab = next.min(self.payloads.len().saturating_sub(1));
    }

    pub fn clear(&mut self) {
        self.payloads.clear();
        self.active_tab = 0;
    }

    /// Select a tab; out-of-range indexes are ignored.
    pub fn set_active_tab(&mut self, index: usize) {
        if index < self.payloads.len() {
            self.active_tab = index;
        }
    }

    pub fn next_tab(&mut self) {
        let len = self.payloads.len();
        if len > 0 {
            self.active_tab = (self.active_tab + 1) % len;
        }
    }

    pub fn prev_tab(&mut self) {
        let len = self.payloads.len();
        if len > 0 {
            self.active_tab = (self.active_tab + len - 1) % len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hall_types::SidecarType;
    use serde_json::json;

    fn payload(kind: SidecarType, message_id: &str) -> SidecarPayload {
        SidecarPayload::new(kind, json!({ "from": message_id })).with_meta(kind.as_str(), message_id)
    }

    fn store_with(count: usize) -> SidecarStore {
        let mut store = SidecarStore::new();
        for i in 0..count {
            store.push(payload(SidecarType::Doc, &format!("m{i}")));
        }
        store
    }

    #[test]
    fn push_appends_and_activates_newest() {
        let mut store = SidecarStore::new();
        for i in 0..4 {
            store.push(payload(SidecarType::Chart, &format!("m{i}")));
            assert_eq!(store.active_tab(), i);
            assert_eq!(store.len(), i + 1);
        }
    }

    #[test]
    fn push_same_identity_replaces_in_place() {
        let mut store = SidecarStore::new();
        store.push(payload(SidecarType::Citations, "m1"));
        store.push(payload(SidecarType::Doc, "m1"));
        store.push(
            SidecarPayload::new(SidecarType::Citations, json!(["updated"]))
                .with_meta("Nguồn trích dẫn", "m1"),
        );

        assert_eq!(store.len(), 2);
        assert_eq!(store.payloads()[0].kind, SidecarType::Citations);
        assert_eq!(store.payloads()[0].data, json!(["updated"]));
        assert_eq!(store.active_tab(), 0);
    }

    #[test]
    fn payloads_without_message_id_share_identity_per_type() {
        let mut store = SidecarStore::new();
        store.push(SidecarPayload::new(SidecarType::Json, json!(1)));
        store.push(SidecarPayload::new(SidecarType::Json, json!(2)));
        store.push(SidecarPayload::new(SidecarType::Audio, json!(3)));

        assert_eq!(store.len(), 2);
        assert_eq!(store.payloads()[0].data, json!(2));
        assert_eq!(store.active_tab(), 1);
    }

    #[test]
    fn close_before_active_shifts_cursor_left() {
        let mut store = store_with(3);
        assert_eq!(store.active_tab(), 2);

        store.close(0);
        assert_eq!(store.len(), 2);
        assert_eq!(store.active_tab(), 1);
    }

    #[test]
    fn close_after_active_keeps_cursor() {
        let mut store = store_with(3);
        store.set_active_tab(0);

        store.close(2);
        assert_eq!(store.len(), 2);
        assert_eq!(store.active_tab(), 0);
    }

    #[test]
    fn close_active_last_tab_selects_new_last() {
        let mut store = store_with(3);
        store.close(2);
        assert_eq!(store.active_tab(), 1);
        assert_eq!(store.active_payload().and_then(|p| p.message_id()), Some("m1"));
    }

    #[test]
    fn close_every_index_keeps_cursor_in_range() {
        for len in 1..6 {
            for active in 0..len {
                for index in 0..len {
                    let mut store = store_with(len);
                    store.set_active_tab(active);
                    store.close(index);

                    assert_eq!(store.len(), len - 1);
                    if !store.is_empty() {
                        assert!(store.active_tab() < store.len());
                    }
                }
            }
        }
    }

    #[test]
    fn close_only_payload_leaves_no_selection() {
        let mut store = store_with(1);
        store.close(0);
        assert!(store.is_empty());
        assert_eq!(store.active_tab(), 0);
        assert!(store.active_payload().is_none());

        store.push(payload(SidecarType::Table, "m9"));
        assert_eq!(store.active_tab(), 0);
    }

    #[test]
    fn close_out_of_range_is_noop() {
        let mut store = store_with(2);
        let before = store.clone();
        store.close(2);
        store.close(usize::MAX);
        assert_eq!(store, before);

        let mut empty = SidecarStore::new();
        empty.close(0);
        assert!(empty.is_empty());
    }

    #[test]
    fn set_active_tab_ignores_out_of_range() {
        let mut store = store_with(3);
        store.set_active_tab(1);
        assert_eq!(store.active_tab(), 1);
        store.set_active_tab(3);
        assert_eq!(store.active_tab(), 1);
    }

    #[test]
    fn next_and_prev_wrap_and_invert() {
        let mut store = store_with(3);
        store.next_tab();
        assert_eq!(store.active_tab(), 0);
        store.prev_tab();
        assert_eq!(store.active_tab(), 2);

        for len in 1..5 {
            for start in 0..len {
                let mut store = store_with(len);
                store.set_active_tab(start);
                store.next_tab();
                store.prev_tab();
                assert_eq!(store.active_tab(), start);
                store.prev_tab();
                store.next_tab();
                assert_eq!(store.active_tab(), start);
            }
        }
    }

    #[test]
    fn navigation_on_empty_store_is_noop() {
        let mut store = SidecarStore::new();
        store.next_tab();
        store.prev_tab();
        assert_eq!(store.active_tab(), 0);
    }

    #[test]
    fn clear_resets_everything() {
        let mut store = store_with(3);
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.active_tab(), 0);
    }
}
