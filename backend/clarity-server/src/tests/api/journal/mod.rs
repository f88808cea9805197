mod entry_form;
