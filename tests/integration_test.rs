use usercards::strings::CLICKED_ON;
use usercards::{
    diff_keys, FakeUserSource, ImageLoader, ListConfig, MessageSink, NoImages, Record, RecordId,
    RecordSource, RecordStore, RowEvent, StringLookup, StringTable, UserListScreen, Viewport,
};

/// Sink that keeps every message it receives.
#[derive(Default)]
struct RecordingSink {
    messages: Vec<String>,
}

impl MessageSink for RecordingSink {
    fn notify(&mut self, text: String) {
        self.messages.push(text);
    }
}

/// Loader that counts live handles, to check that released rows give theirs back.
#[derive(Default)]
struct CountingLoader {
    live: usize,
    issued: usize,
}

impl ImageLoader for CountingLoader {
    type Handle = usize;

    fn load(&mut self, _image_ref: &str) -> usize {
        self.live += 1;
        self.issued += 1;
        self.issued
    }

    fn cancel(&mut self, _handle: usize) {
        self.live -= 1;
    }
}

fn config() -> ListConfig {
    ListConfig { row_height: 100.0, buffer_rows: 2 }
}

fn screen_with(n: usize) -> UserListScreen<NoImages, RecordingSink> {
    UserListScreen::new(
        FakeUserSource::new().generate(n),
        NoImages,
        RecordingSink::default(),
        Box::new(StringTable::english()),
        config(),
    )
}

fn ids(records: &[Record]) -> Vec<RecordId> {
    records.iter().map(Record::id).collect()
}

#[test]
fn test_delete_then_activate_end_to_end() {
    let mut screen = screen_with(5);
    let everything = Viewport::new(0.0, 1000.0);

    let frame = screen.render_pass(everything);
    assert_eq!(frame.visible_keys(), vec![1, 2, 3, 4, 5]);

    screen.handle_event(RowEvent::DeleteRequested(3));
    let frame = screen.render_pass(everything);
    assert_eq!(frame.visible_keys(), vec![1, 2, 4, 5]);
    assert!(screen.sink().messages.is_empty());

    screen.handle_event(RowEvent::Activated(4));

    let title = screen.store().get(4).map(|r| r.title().to_string()).unwrap();
    assert_eq!(screen.sink().messages.len(), 1);
    assert!(screen.sink().messages[0].contains(&title));
    assert_eq!(screen.sink().messages[0], StringTable::english().resolve(CLICKED_ON, &[title.as_str()]));
}

#[test]
fn test_double_delete_is_harmless() {
    let mut screen = screen_with(5);
    screen.render_pass(Viewport::new(0.0, 1000.0));

    screen.handle_event(RowEvent::DeleteRequested(2));
    screen.handle_event(RowEvent::DeleteRequested(2));
    let frame = screen.render_pass(Viewport::new(0.0, 1000.0));

    assert_eq!(frame.keys(), vec![1, 3, 4, 5]);
    assert_eq!(screen.store().generation(), 1);
}

#[test]
fn test_activate_removed_row_is_ignored() {
    let mut screen = screen_with(3);
    screen.render_pass(Viewport::new(0.0, 1000.0));

    screen.handle_event(RowEvent::DeleteRequested(1));
    screen.render_pass(Viewport::new(0.0, 1000.0));
    screen.handle_event(RowEvent::Activated(1));

    assert!(screen.sink().messages.is_empty());
}

#[test]
fn test_delete_does_not_notify_and_activate_does_not_delete() {
    let mut screen = screen_with(4);
    screen.render_pass(Viewport::new(0.0, 1000.0));

    screen.handle_event(RowEvent::Activated(2));
    assert_eq!(screen.store().len(), 4);

    screen.handle_event(RowEvent::DeleteRequested(2));
    assert_eq!(screen.store().len(), 3);
    assert_eq!(screen.sink().messages.len(), 1);
}

#[test]
fn test_remove_every_record_in_any_order() {
    let records = FakeUserSource::with_seed(3).generate(12);
    let mut order = ids(&records);
    order.reverse();
    order.swap(0, 5);
    let mut store = RecordStore::new(records);

    for (step, id) in order.iter().enumerate() {
        let before = store.current();
        let after = store.remove(*id);

        assert_eq!(after.len(), before.len() - 1);
        let expected: Vec<RecordId> = ids(&before).into_iter().filter(|k| k != id).collect();
        assert_eq!(ids(&after), expected, "step {step}");
    }

    assert!(store.is_empty());
    assert!(store.remove(1).is_empty());
}

#[test]
fn test_scrolling_through_long_list_keeps_handles_bounded() {
    let mut screen: UserListScreen<CountingLoader, RecordingSink> = UserListScreen::new(
        FakeUserSource::new().generate(100),
        CountingLoader::default(),
        RecordingSink::default(),
        Box::new(StringTable::english()),
        config(),
    );

    let mut offset = 0.0;
    while offset < 9000.0 {
        screen.render_pass(Viewport::new(offset, 400.0));
        let live = screen.renderer().loader().live;
        assert_eq!(live, screen.renderer().realized_count());
        assert!(live <= 4 + 2 * 2 + 1, "too many rows realized at offset {offset}: {live}");
        offset += 137.0;
    }

    assert!(screen.renderer().stats().rows_destroyed > 0);
}

#[test]
fn test_edit_script_for_store_mutation() {
    let mut store = RecordStore::new(FakeUserSource::new().generate(5));
    let before = ids(&store.current());
    let after = ids(&store.remove(3));

    let script = diff_keys(&before, &after);
    assert_eq!(script.removals.len(), 1);
    assert_eq!(script.removals[0].key, 3);
    assert!(script.insertions.is_empty());

    assert!(diff_keys(&after, &after).is_empty());
}
