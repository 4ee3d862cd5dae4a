/// Every piece of user-facing text the application prints.
///
/// Variants only carry the data needed to render the text; the wording lives
/// in the `Display` implementation in `display.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // === PERSON MESSAGES ===
    PersonAdded(String),   // person summary
    PersonEdited(String),  // person summary
    PersonDeleted(String), // person summary
    PersonsListed(usize),  // count
    AllPersonsListed,
    AddressBookCleared,
    NoPersonsFound,
    PersonsHeader,
    ConfirmClearAddressBook(usize), // count

    // === TASK MESSAGES ===
    TaskAdded(String),     // task summary
    TaskEdited(String),    // task summary
    TaskDeleted(String),   // task summary
    TaskCompleted(String), // task summary
    TasksListed(usize),    // count
    AllTasksListed,
    TaskListCleared,
    NoTasksFound,
    TasksHeader,
    ConfirmClearTaskList(usize), // count

    // === STORAGE MESSAGES ===
    DataFileMissing(String),  // path
    SampleDataLoaded(String), // path
    DataSaved,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigHeader,
    PromptAddressBookFile,
    PromptTaskListFile,
    PromptLoadSampleData,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
