mod tests_select;
