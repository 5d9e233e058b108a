//! Help text for the command set

/// Print the help overview or a specific topic
pub fn print_help(topic: &str) {
    match topic {
        "entry" | "todo" | "lesson" | "concert" | "practice" | "exam" | "recital" | "delete" => {
            print_entry_help()
        }
        "goal" => print_goal_help(),
        "contact" => print_contact_help(),
        "checklist" => print_checklist_help(),
        "calendar" => print_calendar_help(),
        "budget" => print_budget_help(),
        "reschedule" | "edit" | "done" | "change" => print_change_help(),
        _ => print_overview(),
    }
}

fn print_overview() {
    println!("Commands:");
    println!("  list                          show every entry");
    println!("  todo <desc>/<date>            add a to-do (dd-MM-yyyy)");
    println!("  lesson|practice|exam|recital <desc>/<start>/<end>[/p<days>]");
    println!("  concert <desc>/<start>/<end>/<cost>[/p<days>]");
    println!("  done <n>                      mark a to-do as complete");
    println!("  delete <n>                    remove an entry");
    println!("  edit <n>/<desc>               change an entry's description");
    println!("  reschedule <n> <date> <start> <end>");
    println!("  find <keyword>                search entries");
    println!("  view <date>                   entries on a day");
    println!("  check                         next three free days");
    println!("  reminder [days]               what is coming up (default 3 days)");
    println!("  calendar [next|last|on|off]   weekly calendar view");
    println!("  budget set <n> | budget <MM-yyyy>");
    println!("  goal|contact|checklist ...    annotations (see 'help goal' etc.)");
    println!("  bye                           save and exit");
    println!();
    println!("Dates use dd-MM-yyyy, times use HHmm (e.g. 04-12-2019 1600).");
}

fn print_entry_help() {
    println!("Adding entries:");
    println!("  todo <desc>/<date>");
    println!("  lesson <desc>/<start>/<end>");
    println!("  concert <desc>/<start>/<end>/<cost>");
    println!("  practice <desc>/<start>/<end>");
    println!("  exam <desc>/<start>/<end>");
    println!("  recital <desc>/<start>/<end>");
    println!("Append /p<days> to any timed entry to repeat it every <days> days.");
    println!("Remove with: delete <n>  (n from 'list')");
}

fn print_goal_help() {
    println!("Goals:");
    println!("  goal add <n>/<text>");
    println!("  goal delete <n> <g>");
    println!("  goal edit <n> <g>/<text>");
    println!("  goal achieved <n> <g>");
    println!("  goal view <n>");
}

fn print_contact_help() {
    println!("Contacts:");
    println!("  contact add <n>/<name>,<email>,<phone>");
    println!("  contact delete <n> <c>");
    println!("  contact edit <n> <c>/<field>,<value>   (field: name, email, phone)");
    println!("  contact view <n>");
}

fn print_checklist_help() {
    println!("Checklists:");
    println!("  checklist add <n>/<text>");
    println!("  checklist delete <n> <c>");
    println!("  checklist edit <n> <c>/<text>");
    println!("  checklist view <n>");
}

fn print_calendar_help() {
    println!("Calendar:");
    println!("  calendar        show the current week");
    println!("  calendar next   move one week forward");
    println!("  calendar last   move one week back");
    println!("  calendar on     print the calendar after every command");
    println!("  calendar off    stop printing it automatically");
}

fn print_budget_help() {
    println!("Budget:");
    println!("  budget set <n>       set the monthly concert budget");
    println!("  budget <MM-yyyy>     show concert spending for a month");
}

fn print_change_help() {
    println!("Changing entries:");
    println!("  done <n>                          mark a to-do complete");
    println!("  edit <n>/<desc>                   rewrite the description");
    println!("  reschedule <n> <date> <start> <end>   move a timed entry");
}
