mod fs_store_test;
