mod test_cursor;
